use crate::domain::errors::DomainError;

const CNT_VENDOR_SLUG: &str = "vendors_slug_key";
const CNT_PRODUCT_SLUG: &str = "products_slug_key";
const CNT_PRODUCT_VENDOR: &str = "products_vendor_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            match db_err.constraint() {
                Some(CNT_VENDOR_SLUG) => {
                    return DomainError::Conflict("vendor slug already exists".into());
                }
                Some(CNT_PRODUCT_SLUG) => {
                    return DomainError::Conflict("product slug already exists".into());
                }
                Some(CNT_PRODUCT_VENDOR) => {
                    return DomainError::NotFound("vendor not found".into());
                }
                _ => {}
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        let name = db_err.constraint().unwrap_or("check");
                        return DomainError::Validation(format!("{name} constraint violated"));
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
