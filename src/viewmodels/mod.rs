pub mod ar_launcher;

pub use ar_launcher::ArLauncher;
