//! HTTP handlers, one module per admin resource.

pub mod amenity;
pub mod enquiry;
pub mod highlight;
pub mod investor;
pub mod project;
pub mod project_media;
pub mod setting;
pub mod setting_group;
pub mod testimonial;
pub mod timeline;
