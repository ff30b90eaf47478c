use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    ids::{AccountId, CategoryId, CourseId},
    input_error::InputError,
};

pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_DESCRIPTION_LENGTH: usize = 5000;
pub const UNKNOWN_INSTRUCTOR: &str = "Unknown Instructor";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    Draft,
    Published,
}

impl CourseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseStatus::Draft => "draft",
            CourseStatus::Published => "published",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "draft" => Some(CourseStatus::Draft),
            "published" => Some(CourseStatus::Published),
            _ => None,
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub instructor_id: AccountId,
    pub category_id: CategoryId,
    pub price: f64,
    pub cover_image: String,
    /// Legacy mirror of `cover_image`.
    pub cover_image_url: String,
    pub status: CourseStatus,
    pub teacher_name: String,
    pub student_count: i32,
    pub rating: f64,
    pub view_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    pub fn is_published(&self) -> bool {
        self.status == CourseStatus::Published
    }

    /// Publish preconditions: still a draft, with a title, a description and an instructor.
    pub fn ensure_publishable(&self) -> Result<(), InputError> {
        if self.is_published() {
            return Err(InputError::AlreadyPublished);
        }
        if self.title.trim().is_empty() {
            return Err(InputError::Empty("title"));
        }
        if self.description.trim().is_empty() {
            return Err(InputError::Empty("description"));
        }
        if self.instructor_id.is_unset() {
            return Err(InputError::MissingId("instructor id"));
        }
        Ok(())
    }

    /// Applies the present fields of `update`, keeping the cover fields in sync.
    pub fn apply(&mut self, update: CourseUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(category_id) = update.category_id {
            self.category_id = category_id;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(cover_image) = update.cover_image {
            self.cover_image_url = cover_image.clone();
            self.cover_image = cover_image;
        }
    }
}

/// Insert payload for a course. Always starts as a draft.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub instructor_id: AccountId,
    pub category_id: CategoryId,
    pub price: f64,
    pub cover_image: String,
    pub teacher_name: String,
}

impl NewCourse {
    pub fn validate(&self) -> Result<(), InputError> {
        validate_title(&self.title)?;
        validate_description(&self.description)?;
        if self.instructor_id.is_unset() {
            return Err(InputError::MissingId("instructor id"));
        }
        validate_price(self.price)
    }

    pub fn into_course(self, id: CourseId, now: DateTime<Utc>) -> Course {
        Course {
            id,
            title: self.title,
            description: self.description,
            instructor_id: self.instructor_id,
            category_id: self.category_id,
            price: self.price,
            cover_image_url: self.cover_image.clone(),
            cover_image: self.cover_image,
            status: CourseStatus::Draft,
            teacher_name: self.teacher_name,
            student_count: 0,
            rating: 0.0,
            view_count: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial course update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CourseUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<CategoryId>,
    pub price: Option<f64>,
    pub cover_image: Option<String>,
}

impl CourseUpdate {
    pub fn validate(&self) -> Result<(), InputError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), InputError> {
    if title.trim().is_empty() {
        return Err(InputError::Empty("title"));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(InputError::TooLong {
            field: "title",
            max: MAX_TITLE_LENGTH,
        });
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), InputError> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(InputError::TooLong {
            field: "description",
            max: MAX_DESCRIPTION_LENGTH,
        });
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), InputError> {
    if !price.is_finite() || price < 0.0 {
        return Err(InputError::InvalidPrice);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_course() -> NewCourse {
        NewCourse {
            title: "Intro to X".to_string(),
            description: "Everything about X".to_string(),
            instructor_id: AccountId::new(1),
            category_id: CategoryId::new(2),
            price: 10.0,
            cover_image: "cover.png".to_string(),
            teacher_name: "Jane".to_string(),
        }
    }

    #[test]
    fn new_courses_start_as_drafts_with_synced_covers() {
        let course = new_course().into_course(CourseId::new(1), Utc::now());
        assert_eq!(course.status, CourseStatus::Draft);
        assert_eq!(course.cover_image, course.cover_image_url);
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut course = new_course();
        course.title = "   ".to_string();
        assert_eq!(course.validate(), Err(InputError::Empty("title")));
    }

    #[test]
    fn long_title_and_description_are_rejected() {
        let mut course = new_course();
        course.title = "t".repeat(201);
        assert!(matches!(
            course.validate(),
            Err(InputError::TooLong { field: "title", .. })
        ));

        let mut course = new_course();
        course.description = "d".repeat(5001);
        assert!(matches!(
            course.validate(),
            Err(InputError::TooLong {
                field: "description",
                ..
            })
        ));
    }

    #[test]
    fn negative_and_non_finite_prices_are_rejected() {
        for price in [-0.01, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut course = new_course();
            course.price = price;
            assert_eq!(course.validate(), Err(InputError::InvalidPrice));
        }
        assert_eq!(
            CourseUpdate {
                price: Some(f64::INFINITY),
                ..CourseUpdate::default()
            }
            .validate(),
            Err(InputError::InvalidPrice)
        );
    }

    #[test]
    fn publish_requires_a_description() {
        let mut course = new_course().into_course(CourseId::new(1), Utc::now());
        course.description = String::new();
        assert_eq!(
            course.ensure_publishable(),
            Err(InputError::Empty("description"))
        );
    }

    #[test]
    fn publishing_twice_is_rejected() {
        let mut course = new_course().into_course(CourseId::new(1), Utc::now());
        assert!(course.ensure_publishable().is_ok());
        course.status = CourseStatus::Published;
        assert_eq!(
            course.ensure_publishable(),
            Err(InputError::AlreadyPublished)
        );
    }

    #[test]
    fn cover_update_touches_both_fields() {
        let mut course = new_course().into_course(CourseId::new(1), Utc::now());
        course.apply(CourseUpdate {
            cover_image: Some("new.png".to_string()),
            ..CourseUpdate::default()
        });
        assert_eq!(course.cover_image, "new.png");
        assert_eq!(course.cover_image_url, "new.png");
        assert_eq!(course.title, "Intro to X");
    }

    #[test]
    fn status_parses_its_own_labels() {
        for status in [CourseStatus::Draft, CourseStatus::Published] {
            assert_eq!(CourseStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(CourseStatus::parse("archived"), None);
    }
}
