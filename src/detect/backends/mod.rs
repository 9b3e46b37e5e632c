pub mod lsb_pairing;

pub use lsb_pairing::LsbPairingDetector;
