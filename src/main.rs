use turing_field::init::FieldInitializer;
use turing_field::{Command, Controller, PatternSet};

fn main() {
    env_logger::init();

    // Demo stub: evolves a small field with three preset scales
    let (w, h) = (160usize, 120usize);
    let patterns = PatternSet::from_presets(3);
    let mut ctl = match Controller::new(w, h, patterns, FieldInitializer::default()) {
        Ok(ctl) => ctl,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    for _ in 0..20 {
        if let Err(err) = ctl.dispatch(Command::Tick) {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
    let px = ctl.image().pixels();
    let mean = px.iter().sum::<f32>() / px.len() as f32;
    println!("scales={} mean={:.4}", ctl.patterns().len(), mean);
}
