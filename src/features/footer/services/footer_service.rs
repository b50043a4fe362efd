use std::sync::Arc;

use validator::{Validate, ValidateEmail};

use crate::core::error::{AppError, Result};
use crate::features::footer::dtos::{FooterResponseDto, UpdateFooterDto};
use crate::features::footer::models::FooterContent;
use crate::modules::store::FooterStore;
use crate::shared::validation::require_present;

pub struct FooterService {
    store: Arc<dyn FooterStore>,
}

impl FooterService {
    pub fn new(store: Arc<dyn FooterStore>) -> Self {
        Self { store }
    }

    /// Saved footer, or the built-in default when none is saved or the
    /// store cannot be read
    pub async fn get(&self) -> FooterResponseDto {
        match self.store.select_footer().await {
            Ok(Some(footer)) => footer.into(),
            Ok(None) => FooterContent::default().into(),
            Err(e) => {
                tracing::error!("Failed to get footer content: {:?}", e);
                FooterContent::default().into()
            }
        }
    }

    pub async fn update(&self, dto: UpdateFooterDto) -> Result<FooterResponseDto> {
        dto.validate().map_err(AppError::from_validation)?;
        require_present("copyright", &dto.copyright)?;

        let content = FooterContent::from(dto);
        if !content.email.is_empty() && !content.email.validate_email() {
            return Err(AppError::Validation("Invalid email format".to_string()));
        }

        let saved = self.store.upsert_footer(content).await.map_err(|e| {
            tracing::error!("Failed to update footer content: {:?}", e);
            AppError::Store(e)
        })?;

        tracing::info!("Footer content updated");
        Ok(saved.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::store::MemoryStore;

    fn service() -> (Arc<MemoryStore>, FooterService) {
        let store = Arc::new(MemoryStore::new());
        let service = FooterService::new(store.clone());
        (store, service)
    }

    fn footer() -> UpdateFooterDto {
        UpdateFooterDto {
            copyright: "© 2025 Shekhar Sailesh Decoration".to_string(),
            address: "Kathmandu, Nepal".to_string(),
            phone: "+977 98-0000-0000".to_string(),
            email: "info@example.com".to_string(),
            whatsapp: "+9779800000000".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_defaults_when_unset() {
        let (_, service) = service();
        assert_eq!(service.get().await, FooterResponseDto::from(FooterContent::default()));
    }

    #[tokio::test]
    async fn test_update_then_get() {
        let (_, service) = service();
        let saved = service.update(footer()).await.unwrap();

        assert_eq!(service.get().await, saved);
        assert_eq!(saved.address, "Kathmandu, Nepal");
    }

    #[tokio::test]
    async fn test_update_requires_copyright() {
        let (store, service) = service();
        let result = service
            .update(UpdateFooterDto {
                copyright: " ".to_string(),
                ..footer()
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_update_rejects_bad_contact_details() {
        let (store, service) = service();

        let bad_email = service
            .update(UpdateFooterDto {
                email: "not-an-email".to_string(),
                ..footer()
            })
            .await;
        let bad_phone = service
            .update(UpdateFooterDto {
                phone: "call me".to_string(),
                ..footer()
            })
            .await;

        assert!(matches!(bad_email, Err(AppError::Validation(_))));
        assert!(matches!(bad_phone, Err(AppError::Validation(_))));
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_contact_fields_are_allowed() {
        let (_, service) = service();
        let saved = service
            .update(UpdateFooterDto {
                copyright: "© Shekhar Sailesh Decoration".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(saved.email.is_empty());
    }

    #[tokio::test]
    async fn test_get_soft_fails_to_default() {
        let (store, service) = service();
        service.update(footer()).await.unwrap();
        store.set_unavailable(true);

        assert_eq!(service.get().await, FooterResponseDto::from(FooterContent::default()));
    }
}
