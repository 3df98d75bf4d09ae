pub mod error;

pub mod service {
    pub mod config_service;
    pub mod file;
    pub mod format;
    pub mod path;
    pub mod resource;
    pub mod unlock;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod facade {
    pub mod unlock_facade;
    pub mod traits {
        pub mod i_unlock;
    }
}

pub mod models {
    pub mod conversion;
    pub mod resource;
    pub mod summary;
}

pub mod action {
    pub mod cli;
}

pub mod utils {
    pub mod utils;
}
