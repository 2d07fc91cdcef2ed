pub mod a025_article_family;
