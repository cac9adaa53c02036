//! Reusable HTML components for the page shell
//!
//! Each component renders one region of the shell: document head
//! metadata, the profile header, and the back-home link. The layout
//! module composes them around the page content.

pub mod head;
pub mod header;
pub mod layout;
pub mod nav;
