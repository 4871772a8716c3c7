//! Request payloads sent by the phases

use serde_json::{json, Value};

use crate::common::config::Fixtures;
use crate::session::Role;

/// Key the created course, its enrollment and its quiz are captured under
pub const COURSE_KEY: &str = "python";

/// Key the created quiz is captured under
pub const QUIZ_KEY: &str = "python";

/// Address registered for `role`
pub fn email(role: Role, fixtures: &Fixtures) -> String {
    format!("{}@{}", role.as_str(), fixtures.email_domain)
}

pub fn registration(role: Role, fixtures: &Fixtures) -> Value {
    json!({
        "name": role.display_name(),
        "email": email(role, fixtures),
        "password": fixtures.password,
        "password_confirmation": fixtures.password,
        "role": role.as_str(),
    })
}

/// Login body built from a captured registration payload
pub fn login(user: &Value) -> Value {
    json!({
        "email": user.get("email").cloned().unwrap_or(Value::Null),
        "password": user.get("password").cloned().unwrap_or(Value::Null),
    })
}

pub fn forgot_password(fixtures: &Fixtures) -> Value {
    json!({ "email": email(Role::Student, fixtures) })
}

pub fn course(fixtures: &Fixtures) -> Value {
    json!({
        "title": "Python Fundamentals",
        "description": "Learn the basics of Python programming",
        "category_id": fixtures.category_id,
        "level": "beginner",
        "duration": 40,
        "price": 99.99,
        "image_url": "https://example.com/python-course.jpg",
    })
}

pub fn course_update() -> Value {
    json!({
        "title": "Advanced Python Fundamentals",
        "description": "Learn advanced Python programming concepts",
        "level": "intermediate",
        "price": 149.99,
    })
}

pub fn enrollment() -> Value {
    json!({
        "payment_method": "card",
        "payment_details": {
            "card_number": "4111111111111111",
            "expiry_month": "12",
            "expiry_year": "2025",
            "cvv": "123",
        },
    })
}

pub fn quiz() -> Value {
    json!({
        "title": "Python Basics Quiz",
        "description": "Test your knowledge of Python fundamentals",
        "instructions": "Answer all questions to the best of your ability",
        "time_limit_minutes": 30,
        "max_attempts": 3,
        "passing_score": 70,
        "shuffle_questions": true,
        "show_results_immediately": true,
        "allow_review": true,
        "questions": [
            {
                "type": "multiple_choice",
                "question": "What is the correct way to create a list in Python?",
                "options": ["list = []", "list = {}", "list = ()", "list = \"\""],
                "correct_answers": ["list = []"],
                "explanation": "Lists in Python are created using square brackets.",
                "points": 10,
                "case_sensitive": false,
            },
            {
                "type": "true_false",
                "question": "Python is an interpreted language.",
                "options": ["True", "False"],
                "correct_answers": ["True"],
                "explanation": "Python is indeed an interpreted language.",
                "points": 5,
                "case_sensitive": false,
            },
        ],
    })
}

pub fn quiz_answer(fixtures: &Fixtures) -> Value {
    json!({
        "question_id": fixtures.quiz_question_id,
        "answer": "list = []",
    })
}

/// Body for POSTs that take no payload
pub fn empty() -> Value {
    json!({})
}
