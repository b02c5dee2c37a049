mod probe;

pub use probe::ImageCrateProbe;
