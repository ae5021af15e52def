mod spinner;

pub use spinner::LoadingSpinner;
