use serde::{Deserialize, Serialize};
use validator::Validate;

/// Sign-in form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, Validate)]
pub struct SignInRequest {
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Sign-up form. New accounts are always clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, Validate)]
pub struct SignUpRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub display_name: String,
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    #[validate(length(min = 10, message = "Phone number looks wrong"))]
    pub phone: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

/// Aspect of the school a respondent thinks needs work.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ImprovementArea {
    TrainingQuality,
    LessonTimes,
    Facilities,
    CustomerService,
    Prices,
    Other,
}

impl ImprovementArea {
    pub const ALL: &'static [ImprovementArea] = &[
        ImprovementArea::TrainingQuality,
        ImprovementArea::LessonTimes,
        ImprovementArea::Facilities,
        ImprovementArea::CustomerService,
        ImprovementArea::Prices,
        ImprovementArea::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImprovementArea::TrainingQuality => "training-quality",
            ImprovementArea::LessonTimes => "lesson-times",
            ImprovementArea::Facilities => "facilities",
            ImprovementArea::CustomerService => "customer-service",
            ImprovementArea::Prices => "prices",
            ImprovementArea::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImprovementArea::TrainingQuality => "Training quality",
            ImprovementArea::LessonTimes => "Lesson times",
            ImprovementArea::Facilities => "Facilities and equipment",
            ImprovementArea::CustomerService => "Customer service",
            ImprovementArea::Prices => "Prices",
            ImprovementArea::Other => "Other",
        }
    }
}

/// Highest star rating on the survey.
pub const RATING_MAX: u8 = 5;

/// Satisfaction survey filled in by students after their lessons.
///
/// Ratings are 1 to 5 stars; `None` means the question was skipped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, Validate)]
pub struct SurveyResponse {
    #[validate(
        required(message = "Rate your overall satisfaction"),
        range(min = 1, max = 5, message = "Ratings run from 1 to 5 stars")
    )]
    pub overall_satisfaction: Option<u8>,
    #[validate(
        required(message = "Rate your instructor"),
        range(min = 1, max = 5, message = "Ratings run from 1 to 5 stars")
    )]
    pub instructor_rating: Option<u8>,
    #[validate(
        required(message = "Rate our facilities"),
        range(min = 1, max = 5, message = "Ratings run from 1 to 5 stars")
    )]
    pub facility_rating: Option<u8>,
    #[validate(required(message = "Please choose an answer"))]
    pub recommend_to_others: Option<bool>,
    #[serde(default)]
    pub improvements: Vec<ImprovementArea>,
    #[validate(length(min = 10, message = "Comments must be at least 10 characters"))]
    pub comments: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
}

impl SurveyResponse {
    /// Trim text fields; blank contact info becomes `None` and repeated
    /// improvement areas collapse to one.
    pub fn normalized(mut self) -> Self {
        self.comments = self.comments.trim().to_string();
        self.contact_info = self
            .contact_info
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        let mut seen = Vec::with_capacity(self.improvements.len());
        for area in self.improvements {
            if !seen.contains(&area) {
                seen.push(area);
            }
        }
        self.improvements = seen;
        self
    }
}
