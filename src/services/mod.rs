// Service module exports

pub mod event;
pub mod form;
pub mod layout;
pub mod settings;
