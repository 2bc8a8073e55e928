//! Fixed reference data loaded when the store opens.

use oiltracker_types::models::{Grade, Role, User};

/// Created in this order, so `general` gets id 1.
pub const CHANNELS: [&str; 3] = ["general", "trading", "ops"];
pub const GENERAL_CHANNEL_ID: u64 = 1;

pub const WELCOME_SENDER: &str = "System";
pub const WELCOME_MESSAGE: &str = "Welcome to OilTracker team chat";

pub fn users() -> Vec<User> {
    [
        (1, "Youssef SAYADI", "y.sayadi@direct-medical.net", Role::Admin, "admin123"),
        (2, "Senior Buyer", "senior@oiltracker.com", Role::Senior, "senior123"),
        (3, "Junior Buyer", "junior@oiltracker.com", Role::Junior, "junior123"),
        (4, "Viewer", "viewer@oiltracker.com", Role::Viewer, "viewer123"),
    ]
    .into_iter()
    .map(|(id, name, email, role, password)| User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        password: password.to_string(),
    })
    .collect()
}

pub fn grades() -> Vec<Grade> {
    [
        "RBD Palm Oil",
        "RBD Palm Stearin",
        "RBD Palm Olein IV56",
        "Olein IV64",
        "RBD PKO",
        "RBD CNO",
        "CDSBO",
    ]
    .into_iter()
    .zip(1..)
    .map(|(name, id)| Grade {
        id,
        name: name.to_string(),
    })
    .collect()
}
