mod back_button;
mod error;
mod loading;
mod page;
mod view;

pub use page::MovieDetail;
