pub mod form_detail_card;
pub mod form_table;
pub mod picture_card;

pub use form_detail_card::FormDetailCard;
pub use form_table::FormTable;
pub use picture_card::PictureCard;
