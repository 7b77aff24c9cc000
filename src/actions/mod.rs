pub mod login;
pub mod logout;

pub use login::LoginAction;
pub use logout::LogoutAction;
