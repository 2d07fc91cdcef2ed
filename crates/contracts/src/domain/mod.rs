pub mod a025_article_family;
pub mod a026_supplier;
pub mod a027_buyer;
