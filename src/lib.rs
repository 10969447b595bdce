pub mod config; // Startup defaults (TOML)
pub mod dsp; // Pure synthesis and envelope math
pub mod export; // CSV/JSON writers
pub mod session; // Waveform list and display state
