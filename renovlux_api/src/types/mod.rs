mod meta;
pub use self::meta::{ApiResponse, PageInfo};

mod id;
pub use self::id::{string_id, RawId};

mod service;
pub use self::service::{RawService, Service};

mod project;
pub use self::project::{PortfolioItem, RawCategory, RawProject};

mod product;
pub use self::product::{Availability, Dimensions, Product, ProductListPayload};

mod contact;
pub use self::contact::{ContactFormData, ContactReply, NewsletterRequest};
