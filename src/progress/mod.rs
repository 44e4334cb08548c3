mod progress_bar;

pub use progress_bar::progress_bar;
