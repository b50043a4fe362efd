use sqlx::FromRow;

/// Singleton row of the `site_footer` collection
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct FooterContent {
    pub copyright: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub whatsapp: String,
}

impl Default for FooterContent {
    /// Shown until an admin saves footer content
    fn default() -> Self {
        Self {
            copyright: "© Shekhar Sailesh Decoration. All rights reserved.".to_string(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            whatsapp: String::new(),
        }
    }
}
