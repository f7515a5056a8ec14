pub mod add_movie;
pub mod app;
pub mod catalog;
pub mod header;
pub mod login;
pub mod movie_card;
pub mod movie_detail;
pub mod pager;
pub mod session_form;
pub mod shell;
pub mod signup;

pub use add_movie::AddMovie;
pub use app::App;
pub use catalog::{Catalog, CatalogView};
pub use header::Header;
pub use login::Login;
pub use movie_card::{MovieCard, StarRating};
pub use movie_detail::MovieDetail;
pub use pager::Pager;
pub use shell::{use_shell, SessionActions, Shell, ShellState};
pub use signup::Signup;
