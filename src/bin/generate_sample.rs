use serde::Serialize;

/// Row layout matching the published launch dataset header.
#[derive(Serialize)]
struct Row<'a> {
    #[serde(rename = "Flight Number")]
    flight_number: u32,
    #[serde(rename = "Launch Site")]
    launch_site: &'a str,
    class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: &'a str,
}

/// Minimal deterministic PRNG (SplitMix64)
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);

    let sites = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];
    // (category, success probability, max payload kg)
    let boosters: [(&str, f64, f64); 5] = [
        ("v1.0", 0.2, 700.0),
        ("v1.1", 0.35, 4500.0),
        ("FT", 0.7, 9600.0),
        ("B4", 0.55, 6800.0),
        ("B5", 0.9, 5400.0),
    ];

    let output_path = "sample_launches.csv";
    let mut writer = csv::Writer::from_path(output_path)?;

    let n_launches = 56;
    for i in 0..n_launches {
        // Later flights move to newer boosters.
        let era = (i * boosters.len() / n_launches).min(boosters.len() - 1);
        let (category, p_success, max_payload) = boosters[era];
        let payload = (rng.next_f64() * max_payload / 10.0).round() * 10.0;

        writer.serialize(Row {
            flight_number: i as u32 + 1,
            launch_site: *rng.pick(&sites),
            class: u8::from(rng.next_f64() < p_success),
            payload_mass_kg: payload,
            booster_version: format!("F9 {category} B{:04}", 1000 + i),
            booster_version_category: category,
        })?;
    }
    writer.flush()?;

    println!("Wrote {n_launches} launches to {output_path}");
    Ok(())
}
