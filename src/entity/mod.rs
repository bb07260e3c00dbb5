pub mod favorites_people;
pub mod favorites_planets;
pub mod people;
pub mod planets;
pub mod users;

pub use favorites_people::Entity as FavoritesPeople;
pub use favorites_planets::Entity as FavoritesPlanets;
pub use people::Entity as People;
pub use planets::Entity as Planets;
pub use users::Entity as Users;
