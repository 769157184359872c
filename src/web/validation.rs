//! Field-level validation for untrusted input
//!
//! The contracts the lifecycle service relies on: required text present,
//! date strings parseable, price non-negative, URLs well-formed, identifiers
//! positive. Everything here runs before a request reaches the services.

use url::Url;

use crate::errors::AppError;
use crate::models::{MessageCreateRequest, PriceInput, ShowCreateRequest, ShowUpdateRequest};
use crate::utils::DateTimeParser;

pub fn validate_id(id: i64) -> Result<(), AppError> {
    if id <= 0 {
        return Err(AppError::validation("ID must be a positive integer"));
    }
    Ok(())
}

pub fn validate_show_create(request: &ShowCreateRequest) -> Result<(), AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::validation("Title is required"));
    }
    if request.description.trim().is_empty() {
        return Err(AppError::validation("Description is required"));
    }
    if !DateTimeParser::is_parseable(&request.date) {
        return Err(AppError::validation("Invalid date format"));
    }
    if !DateTimeParser::is_parseable(&request.time) {
        return Err(AppError::validation("Invalid time format"));
    }
    if let Some(end_time) = &request.end_time {
        if !DateTimeParser::is_parseable(end_time) {
            return Err(AppError::validation("Invalid end time format"));
        }
    }
    if let Some(price) = &request.price {
        validate_price(price)?;
    }
    if let Some(ticket_url) = &request.ticket_url {
        validate_url(ticket_url)?;
    }
    validate_capacity(request.max_capacity, request.sold_tickets)?;
    Ok(())
}

pub fn validate_show_update(request: &ShowUpdateRequest) -> Result<(), AppError> {
    if let Some(title) = &request.title {
        if title.trim().is_empty() {
            return Err(AppError::validation("Title is required"));
        }
    }
    if let Some(description) = &request.description {
        if description.trim().is_empty() {
            return Err(AppError::validation("Description is required"));
        }
    }
    if let Some(date) = &request.date {
        if !DateTimeParser::is_parseable(date) {
            return Err(AppError::validation("Invalid date format"));
        }
    }
    if let Some(time) = &request.time {
        if !DateTimeParser::is_parseable(time) {
            return Err(AppError::validation("Invalid time format"));
        }
    }
    if let Some(end_time) = &request.end_time {
        if !DateTimeParser::is_parseable(end_time) {
            return Err(AppError::validation("Invalid end time format"));
        }
    }
    if let Some(price) = &request.price {
        validate_price(price)?;
    }
    if let Some(ticket_url) = &request.ticket_url {
        validate_url(ticket_url)?;
    }
    validate_capacity(request.max_capacity, request.sold_tickets)?;
    Ok(())
}

pub fn validate_sold_tickets(sold_tickets: i64) -> Result<(), AppError> {
    if sold_tickets < 0 {
        return Err(AppError::validation(
            "Sold tickets must be a non-negative integer",
        ));
    }
    Ok(())
}

pub fn validate_message(request: &MessageCreateRequest) -> Result<(), AppError> {
    if request.name.trim().chars().count() < 2 {
        return Err(AppError::validation("Name must be at least 2 characters"));
    }
    validate_email(&request.email)?;
    let length = request.body.chars().count();
    if length < 10 {
        return Err(AppError::validation(
            "Message must be at least 10 characters",
        ));
    }
    if length > 1000 {
        return Err(AppError::validation(
            "Message must be less than 1000 characters",
        ));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), AppError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };

    if !valid {
        return Err(AppError::validation("Please provide a valid email address"));
    }
    Ok(())
}

fn validate_price(price: &PriceInput) -> Result<(), AppError> {
    match price.as_amount() {
        Some(amount) if amount >= 0.0 && amount.is_finite() => Ok(()),
        _ => Err(AppError::validation("Price must be a non-negative number")),
    }
}

fn validate_url(input: &str) -> Result<(), AppError> {
    Url::parse(input).map_err(|_| AppError::validation("Invalid URL format"))?;
    Ok(())
}

fn validate_capacity(
    max_capacity: Option<i64>,
    sold_tickets: Option<i64>,
) -> Result<(), AppError> {
    if let Some(capacity) = max_capacity {
        if capacity <= 0 {
            return Err(AppError::validation(
                "Max capacity must be a positive integer",
            ));
        }
    }
    if let Some(sold) = sold_tickets {
        validate_sold_tickets(sold)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShowStatus;

    fn create_request() -> ShowCreateRequest {
        ShowCreateRequest {
            title: "Friday Night Comedy".to_string(),
            date: "2030-06-01T20:00:00Z".to_string(),
            time: "2030-06-01T20:00:00Z".to_string(),
            end_time: None,
            description: "Stand-up night".to_string(),
            location: None,
            venue: None,
            price: None,
            ticket_url: None,
            performers: None,
            featured: false,
            status: ShowStatus::Scheduled,
            max_capacity: None,
            sold_tickets: None,
            image: None,
            published: true,
        }
    }

    #[test]
    fn accepts_a_minimal_show() {
        assert!(validate_show_create(&create_request()).is_ok());
    }

    #[test]
    fn rejects_blank_title() {
        let mut request = create_request();
        request.title = "   ".to_string();
        assert!(validate_show_create(&request).is_err());
    }

    #[test]
    fn rejects_unparseable_date() {
        let mut request = create_request();
        request.date = "soonish".to_string();
        assert!(validate_show_create(&request).is_err());
    }

    #[test]
    fn accepts_numeric_string_price() {
        let mut request = create_request();
        request.price = Some(PriceInput::Text("12.50".to_string()));
        assert!(validate_show_create(&request).is_ok());
    }

    #[test]
    fn rejects_negative_price() {
        let mut request = create_request();
        request.price = Some(PriceInput::Amount(-1.0));
        assert!(validate_show_create(&request).is_err());
    }

    #[test]
    fn rejects_malformed_ticket_url() {
        let mut request = create_request();
        request.ticket_url = Some("not a url".to_string());
        assert!(validate_show_create(&request).is_err());
    }

    #[test]
    fn rejects_zero_capacity() {
        let mut request = create_request();
        request.max_capacity = Some(0);
        assert!(validate_show_create(&request).is_err());
    }

    #[test]
    fn rejects_non_positive_ids() {
        assert!(validate_id(0).is_err());
        assert!(validate_id(-3).is_err());
        assert!(validate_id(1).is_ok());
    }

    #[test]
    fn email_shape_checks() {
        assert!(validate_email("fan@example.com").is_ok());
        assert!(validate_email("fan@example").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("fan example@x.com").is_err());
    }
}
