//! Builds a small session, computes envelope curves, and writes CSV and
//! JSON exports into the working directory.
//!
//! Run with: cargo run --example export_session

use wavescope::config::Config;
use wavescope::dsp::waveform::WaveKind;
use wavescope::export;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let mut session = Config::default().initial_session();
    session.add_waveform();
    session.add_waveform();
    session.waveforms[1].kind = WaveKind::Square;
    session.waveforms[1].duty_cycle = 25.0;
    session.waveforms[2].kind = WaveKind::Triangle;
    session.waveforms[2].frequency = 2.0;
    session.show_max = true;
    session.show_min = true;
    session.show_rms = true;

    let frame = session.compute();
    export::export_csv("session.csv", &frame, session.sample_rate, session.duration())?;
    export::export_json("session.json", &frame, session.sample_rate, session.duration())?;

    println!(
        "Wrote session.csv and session.json ({} samples, {} envelope curves)",
        frame.traces[0].series.len(),
        frame.envelopes.len()
    );
    Ok(())
}
