//! Repositories: one unit struct per entity with async CRUD over `&PgPool`.

mod amenity_repo;
mod enquiry_repo;
mod floor_plan_repo;
mod highlight_repo;
mod investor_repo;
mod project_doc_repo;
mod project_image_repo;
mod project_repo;
mod setting_group_repo;
mod setting_repo;
mod testimonial_repo;
mod timeline_repo;

pub use amenity_repo::AmenityRepo;
pub use enquiry_repo::EnquiryRepo;
pub use floor_plan_repo::ProjectFloorPlanRepo;
pub use highlight_repo::ProjectHighlightRepo;
pub use investor_repo::InvestorRepo;
pub use project_doc_repo::ProjectDocRepo;
pub use project_image_repo::ProjectImageRepo;
pub use project_repo::ProjectRepo;
pub use setting_group_repo::SettingGroupRepo;
pub use setting_repo::SettingRepo;
pub use testimonial_repo::TestimonialRepo;
pub use timeline_repo::{ProjectTimelineMediaRepo, ProjectTimelineRepo};
