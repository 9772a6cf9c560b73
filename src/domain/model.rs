use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Student,
    Teacher,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => f.write_str("Student"),
            Role::Teacher => f.write_str("Teacher"),
        }
    }
}

/// A course participant. Equality is structural over name, email and role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PersonRecord")]
pub struct Person {
    name: String,
    email: String,
    role: Role,
}

#[derive(Deserialize)]
struct PersonRecord {
    name: String,
    email: String,
    role: Role,
}

impl TryFrom<PersonRecord> for Person {
    type Error = RegistryError;

    fn try_from(record: PersonRecord) -> Result<Self> {
        Person::new(record.role, record.name, record.email)
    }
}

impl Person {
    pub fn new(role: Role, name: impl Into<String>, email: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let email = email.into();
        validate_non_empty_string("name", &name)?;
        validate_non_empty_string("email", &email)?;
        Ok(Self { name, email, role })
    }

    pub fn student(name: impl Into<String>, email: impl Into<String>) -> Result<Self> {
        Self::new(Role::Student, name, email)
    }

    pub fn teacher(name: impl Into<String>, email: impl Into<String>) -> Result<Self> {
        Self::new(Role::Teacher, name, email)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}, Email: {}", self.role, self.name, self.email)
    }
}

/// Variant-specific attribute of a course, stored next to the shared fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CourseKind {
    Online { platform: String },
    InPerson { location: String },
    Special { special_requirements: String },
}

impl fmt::Display for CourseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseKind::Online { platform } => write!(f, "Platform: {}", platform),
            CourseKind::InPerson { location } => write!(f, "Location: {}", location),
            CourseKind::Special {
                special_requirements,
            } => write!(f, "Special requirements: {}", special_requirements),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CourseRecord")]
pub struct Course {
    title: String,
    capacity: u32,
    participants: Vec<Person>,
    #[serde(flatten)]
    kind: CourseKind,
}

#[derive(Deserialize)]
struct CourseRecord {
    title: String,
    capacity: i64,
    #[serde(default)]
    participants: Vec<Person>,
    #[serde(flatten)]
    kind: CourseKind,
}

impl TryFrom<CourseRecord> for Course {
    type Error = RegistryError;

    fn try_from(record: CourseRecord) -> Result<Self> {
        let mut course = Course::new(record.title, record.capacity, record.kind)?;
        for participant in record.participants {
            course.add_participant(participant)?;
        }
        Ok(course)
    }
}

impl Course {
    pub fn new(title: impl Into<String>, capacity: i64, kind: CourseKind) -> Result<Self> {
        let capacity = validate_positive("capacity", capacity)?;
        Ok(Self {
            title: title.into(),
            capacity,
            participants: Vec::new(),
            kind,
        })
    }

    pub fn online(
        title: impl Into<String>,
        capacity: i64,
        platform: impl Into<String>,
    ) -> Result<Self> {
        Self::new(
            title,
            capacity,
            CourseKind::Online {
                platform: platform.into(),
            },
        )
    }

    pub fn in_person(
        title: impl Into<String>,
        capacity: i64,
        location: impl Into<String>,
    ) -> Result<Self> {
        Self::new(
            title,
            capacity,
            CourseKind::InPerson {
                location: location.into(),
            },
        )
    }

    pub fn special(
        title: impl Into<String>,
        capacity: i64,
        special_requirements: impl Into<String>,
    ) -> Result<Self> {
        Self::new(
            title,
            capacity,
            CourseKind::Special {
                special_requirements: special_requirements.into(),
            },
        )
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn participants(&self) -> &[Person] {
        &self.participants
    }

    pub fn kind(&self) -> &CourseKind {
        &self.kind
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.capacity as usize
    }

    pub fn remaining_seats(&self) -> u32 {
        self.capacity.saturating_sub(self.participants.len() as u32)
    }

    /// Capacity is checked before duplicates, so a full course reports
    /// `CapacityReached` even for someone already enrolled.
    pub fn add_participant(&mut self, participant: Person) -> Result<()> {
        if self.is_full() {
            return Err(RegistryError::CapacityReached {
                title: self.title.clone(),
                capacity: self.capacity,
            });
        }

        if self.participants.contains(&participant) {
            return Err(RegistryError::DuplicateParticipant {
                name: participant.name,
            });
        }

        self.participants.push(participant);
        Ok(())
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Course: {}, Maximum capacity: {}",
            self.title, self.capacity
        )?;
        for participant in &self.participants {
            writeln!(f, "{}", participant)?;
        }
        write!(f, "{}", self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_keeps_fields() {
        let person = Person::student("Ana", "ana@x.com").unwrap();
        assert_eq!(person.name(), "Ana");
        assert_eq!(person.email(), "ana@x.com");
        assert_eq!(person.role(), Role::Student);
        assert_eq!(person.describe(), "Student: Ana, Email: ana@x.com");
    }

    #[test]
    fn test_person_rejects_blank_fields() {
        assert!(matches!(
            Person::student("", "ana@x.com"),
            Err(RegistryError::ValidationError { .. })
        ));
        assert!(matches!(
            Person::teacher("Ana", "   "),
            Err(RegistryError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_same_fields_different_role_are_distinct() {
        let student = Person::student("Ana", "ana@x.com").unwrap();
        let teacher = Person::teacher("Ana", "ana@x.com").unwrap();
        assert_ne!(student, teacher);
    }

    #[test]
    fn test_course_rejects_non_positive_capacity() {
        for capacity in [0, -1, -100] {
            assert!(matches!(
                Course::online("Math101", capacity, "Zoom"),
                Err(RegistryError::ValidationError { .. })
            ));
        }
        let course = Course::in_person("Art", 3, "Room 2").unwrap();
        assert!(course.participants().is_empty());
        assert_eq!(course.remaining_seats(), 3);
    }

    #[test]
    fn test_add_participants_up_to_capacity() {
        let mut course = Course::online("Math101", 2, "Zoom").unwrap();
        course
            .add_participant(Person::student("Ana", "ana@x.com").unwrap())
            .unwrap();
        course
            .add_participant(Person::teacher("Bob", "bob@x.com").unwrap())
            .unwrap();
        assert!(course.is_full());

        let err = course
            .add_participant(Person::student("Cid", "cid@x.com").unwrap())
            .unwrap_err();
        assert!(matches!(err, RegistryError::CapacityReached { capacity: 2, .. }));

        let names: Vec<&str> = course.participants().iter().map(Person::name).collect();
        assert_eq!(names, vec!["Ana", "Bob"]);
    }

    #[test]
    fn test_duplicate_participant_rejected() {
        let mut course = Course::special("Lab", 5, "Safety goggles").unwrap();
        let ana = Person::student("Ana", "ana@x.com").unwrap();
        course.add_participant(ana.clone()).unwrap();
        let err = course.add_participant(ana).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateParticipant { ref name } if name == "Ana"));
        assert_eq!(course.participants().len(), 1);
    }

    #[test]
    fn test_capacity_checked_before_duplicates() {
        let mut course = Course::online("Solo", 1, "Meet").unwrap();
        let ana = Person::student("Ana", "ana@x.com").unwrap();
        course.add_participant(ana.clone()).unwrap();
        assert!(matches!(
            course.add_participant(ana),
            Err(RegistryError::CapacityReached { .. })
        ));
    }

    #[test]
    fn test_describe_lists_all_fields() {
        let mut course = Course::in_person("History", 10, "Hall A").unwrap();
        course
            .add_participant(Person::teacher("Eva", "eva@x.com").unwrap())
            .unwrap();
        assert_eq!(
            course.describe(),
            "Course: History, Maximum capacity: 10\nTeacher: Eva, Email: eva@x.com\nLocation: Hall A"
        );
    }

    #[test]
    fn test_json_shape() {
        let mut course = Course::online("Math101", 1, "Zoom").unwrap();
        course
            .add_participant(Person::student("Ana", "ana@x.com").unwrap())
            .unwrap();
        let value = serde_json::to_value(&course).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "Math101",
                "capacity": 1,
                "participants": [{"name": "Ana", "email": "ana@x.com", "role": "Student"}],
                "type": "Online",
                "platform": "Zoom"
            })
        );
    }

    #[test]
    fn test_deserialize_enforces_invariants() {
        let over_capacity = serde_json::json!({
            "title": "Tiny",
            "capacity": 1,
            "participants": [
                {"name": "Ana", "email": "ana@x.com", "role": "Student"},
                {"name": "Bob", "email": "bob@x.com", "role": "Student"}
            ],
            "type": "InPerson",
            "location": "Room 1"
        });
        assert!(serde_json::from_value::<Course>(over_capacity).is_err());

        let zero_capacity = serde_json::json!({
            "title": "Empty",
            "capacity": 0,
            "type": "Online",
            "platform": "Zoom"
        });
        assert!(serde_json::from_value::<Course>(zero_capacity).is_err());

        let blank_person = serde_json::json!({"name": " ", "email": "x@x.com", "role": "Teacher"});
        assert!(serde_json::from_value::<Person>(blank_person).is_err());
    }
}
