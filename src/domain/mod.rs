pub mod price;
pub mod selection;
pub mod whatsapp;
