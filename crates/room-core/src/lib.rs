pub mod ambient;
pub mod camera;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod hinge;
pub mod host;
pub mod hover_group;
pub mod hover_scale;
pub mod outline;
pub mod particles;
pub mod ray;
pub mod role;
pub mod scene;
pub mod spin;
pub mod tween;

pub use ambient::*;
pub use camera::*;
pub use catalog::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use error::*;
pub use hinge::*;
pub use host::*;
pub use hover_group::*;
pub use hover_scale::*;
pub use outline::*;
pub use particles::*;
pub use ray::*;
pub use role::*;
pub use scene::*;
pub use spin::*;
pub use tween::*;
