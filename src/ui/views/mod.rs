pub use self::fleet::FleetView;

mod fleet;
