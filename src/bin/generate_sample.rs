use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_range(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }

    fn pick<'a, T>(&mut self, options: &'a [T]) -> &'a T {
        &options[self.next_range(options.len() as u64) as usize]
    }

    fn chance(&mut self, percent: u64) -> bool {
        self.next_range(100) < percent
    }
}

const COUNTRIES: [&str; 9] = [
    "USA",
    "China",
    "Russia",
    "United Kingdom",
    "Japan",
    "India",
    "France",
    "Germany",
    "Multinational",
];

const PURPOSES: [&str; 9] = [
    "Communications",
    "Earth Observation",
    "Technology Development",
    "Navigation/Global Positioning",
    "Earth Science",
    "Space Science",
    "Communications/Technology Development",
    "Earth Observation / Technology Development",
    "Signals Intelligence",
];

// A few dirty-cased entries to exercise the orbit-class cleanup.
const ORBIT_CLASSES: [&str; 7] = ["LEO", "GEO", "MEO", "Elliptical", "LEo", "GeO", "MEo"];

/// Render a mass/power value the way real catalogue cells look: sometimes
/// plain, sometimes with grouping commas, a unit, an annotation, or a
/// decimal tail, and sometimes missing entirely.
fn dirty_cell(rng: &mut SimpleRng, value: u64, unit: &str) -> Option<String> {
    if rng.chance(12) {
        return None;
    }
    let grouped = if value >= 1000 && rng.chance(50) {
        format!("{},{:03}", value / 1000, value % 1000)
    } else {
        value.to_string()
    };
    Some(match rng.next_range(5) {
        0 => grouped,
        1 => format!("{grouped}{unit}"),
        2 => format!("{grouped} (BOL)"),
        3 => format!("{grouped} (EOL)"),
        _ => format!("{}.{}", grouped, rng.next_range(10)),
    })
}

struct Row {
    name: String,
    country: String,
    purpose: String,
    orbit_class: String,
    launch_mass: Option<String>,
    power: Option<String>,
}

fn generate_rows(n: usize, rng: &mut SimpleRng) -> Vec<Row> {
    (0..n)
        .map(|i| {
            let orbit_class = rng.pick(&ORBIT_CLASSES).to_string();
            // Heavier birds sit higher; powers loosely track mass.
            let mass_base: u64 = match orbit_class.to_uppercase().as_str() {
                "LEO" => 150 + rng.next_range(1200),
                "MEO" => 600 + rng.next_range(1800),
                _ => 2000 + rng.next_range(5000),
            };
            let power_base = 50 + mass_base / 2 + rng.next_range(mass_base);

            Row {
                name: format!("SAT-{:04}", i + 1),
                country: rng.pick(&COUNTRIES).to_string(),
                purpose: rng.pick(&PURPOSES).to_string(),
                orbit_class,
                launch_mass: dirty_cell(rng, mass_base, " kg"),
                power: dirty_cell(rng, power_base, "W"),
            }
        })
        .collect()
}

fn write_csv(rows: &[Row], path: &str) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV output")?;
    writer.write_record([
        "Name of Satellite, Alternate Names",
        "Country of Operator/Owner",
        "Purpose",
        "Class of Orbit",
        "Launch Mass (kg.)",
        "Power (watts)",
    ])?;
    for row in rows {
        writer.write_record([
            row.name.as_str(),
            row.country.as_str(),
            row.purpose.as_str(),
            row.orbit_class.as_str(),
            row.launch_mass.as_deref().unwrap_or(""),
            row.power.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush().context("flushing CSV output")?;
    Ok(())
}

fn write_parquet(rows: &[Row], path: &str) -> Result<()> {
    let string_column = |f: fn(&Row) -> Option<&str>| -> ArrayRef {
        Arc::new(StringArray::from(
            rows.iter().map(f).collect::<Vec<Option<&str>>>(),
        ))
    };

    let schema = Arc::new(Schema::new(vec![
        Field::new("Name of Satellite, Alternate Names", DataType::Utf8, true),
        Field::new("Country of Operator/Owner", DataType::Utf8, true),
        Field::new("Purpose", DataType::Utf8, true),
        Field::new("Class of Orbit", DataType::Utf8, true),
        Field::new("Launch Mass (kg.)", DataType::Utf8, true),
        Field::new("Power (watts)", DataType::Utf8, true),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            string_column(|r| Some(r.name.as_str())),
            string_column(|r| Some(r.country.as_str())),
            string_column(|r| Some(r.purpose.as_str())),
            string_column(|r| Some(r.orbit_class.as_str())),
            string_column(|r| r.launch_mass.as_deref()),
            string_column(|r| r.power.as_deref()),
        ],
    )
    .context("creating record batch")?;

    let file = std::fs::File::create(path).context("creating Parquet output")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let stem = std::env::args().nth(1).unwrap_or_else(|| "sample_catalogue".to_string());
    let mut rng = SimpleRng::new(42);

    let rows = generate_rows(400, &mut rng);

    let csv_path = format!("{stem}.csv");
    let parquet_path = format!("{stem}.parquet");
    write_csv(&rows, &csv_path)?;
    write_parquet(&rows, &parquet_path)?;

    println!("Wrote {} satellites to {csv_path} and {parquet_path}", rows.len());
    Ok(())
}
