//! Section renderers.
//! Each takes the whole CV document and returns one `<section>` fragment.
//! Missing fields degrade to placeholders, never to errors.

pub mod about;
pub mod awards;
pub mod contact;
pub mod publications;
pub mod research;
pub mod service;
pub mod teaching;
