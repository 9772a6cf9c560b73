use crate::core::persistence::{self, LoadStatus};
use crate::domain::model::{Course, Person};
use crate::domain::ports::Storage;
use crate::utils::error::{RegistryError, Result};
use std::collections::HashSet;

pub const NO_COURSES_MESSAGE: &str = "No courses registered at the moment.";

/// Title-keyed, insertion-ordered collection of courses backed by one data file.
pub struct Registry<S: Storage> {
    storage: S,
    data_file: String,
    courses: Vec<Course>,
    load_status: LoadStatus,
}

impl<S: Storage> Registry<S> {
    /// Loads the course list from `data_file`. A missing or unreadable file, or one
    /// repeating a course title, yields an empty registry.
    pub fn open(storage: S, data_file: impl Into<String>) -> Self {
        let data_file = data_file.into();
        let mut loaded = persistence::load::<Vec<Course>, _>(&storage, &data_file);

        if let Some(title) = first_duplicate_title(&loaded.value) {
            let reason = format!("duplicate course title '{}'", title);
            loaded.value.clear();
            loaded.status = LoadStatus::Recovered(reason);
        }

        match &loaded.status {
            LoadStatus::Loaded => tracing::info!(
                "Loaded {} course(s) from {}",
                loaded.value.len(),
                data_file
            ),
            LoadStatus::Missing => tracing::info!("Starting with an empty registry"),
            LoadStatus::Recovered(reason) => {
                tracing::warn!("Ignoring unreadable data file {}: {}", data_file, reason)
            }
        }

        Self {
            storage,
            data_file,
            courses: loaded.value,
            load_status: loaded.status,
        }
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn find_course(&self, title: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.title() == title)
    }

    pub fn add_course(&mut self, course: Course) -> Result<()> {
        if self.find_course(course.title()).is_some() {
            tracing::warn!("Rejected duplicate course '{}'", course.title());
            return Err(RegistryError::DuplicateCourse {
                title: course.title().to_string(),
            });
        }

        tracing::info!("Added course '{}'", course.title());
        self.courses.push(course);
        Ok(())
    }

    pub fn add_participant(&mut self, title: &str, participant: Person) -> Result<()> {
        let course = self
            .courses
            .iter_mut()
            .find(|c| c.title() == title)
            .ok_or_else(|| RegistryError::CourseNotFound {
                title: title.to_string(),
            })?;

        let name = participant.name().to_string();
        course.add_participant(participant).inspect_err(|e| {
            tracing::warn!("Could not add {} to '{}': {}", name, title, e);
        })?;

        tracing::info!("Added {} to '{}'", name, title);
        Ok(())
    }

    /// Every course description in list order, separated by a blank line.
    pub fn list_courses(&self) -> String {
        if self.courses.is_empty() {
            return NO_COURSES_MESSAGE.to_string();
        }

        self.courses
            .iter()
            .map(Course::describe)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn save_all(&self) -> Result<()> {
        persistence::save(&self.storage, &self.courses, &self.data_file).inspect_err(|e| {
            tracing::warn!("Failed to save {}: {}", self.data_file, e);
        })?;
        tracing::info!(
            "Saved {} course(s) to {}",
            self.courses.len(),
            self.data_file
        );
        Ok(())
    }
}

fn first_duplicate_title(courses: &[Course]) -> Option<String> {
    let mut seen = HashSet::new();
    courses
        .iter()
        .map(Course::title)
        .find(|title| !seen.insert(*title))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::LocalStorage;
    use tempfile::TempDir;

    fn empty_registry(temp_dir: &TempDir) -> Registry<LocalStorage> {
        Registry::open(LocalStorage::new(temp_dir.path()), "courses.json")
    }

    #[test]
    fn test_duplicate_title_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = empty_registry(&temp_dir);

        registry
            .add_course(Course::online("Math101", 10, "Zoom").unwrap())
            .unwrap();
        let err = registry
            .add_course(Course::in_person("Math101", 5, "Room 1").unwrap())
            .unwrap_err();

        assert!(matches!(err, RegistryError::DuplicateCourse { .. }));
        assert_eq!(registry.courses().len(), 1);
    }

    #[test]
    fn test_titles_are_case_sensitive() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = empty_registry(&temp_dir);

        registry
            .add_course(Course::online("Math101", 10, "Zoom").unwrap())
            .unwrap();
        registry
            .add_course(Course::online("math101", 10, "Zoom").unwrap())
            .unwrap();

        assert_eq!(registry.courses().len(), 2);
        assert!(matches!(
            registry.add_participant("MATH101", Person::student("Ana", "ana@x.com").unwrap()),
            Err(RegistryError::CourseNotFound { .. })
        ));
    }

    #[test]
    fn test_unknown_course_leaves_registry_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = empty_registry(&temp_dir);
        registry
            .add_course(Course::online("Math101", 10, "Zoom").unwrap())
            .unwrap();

        let err = registry
            .add_participant("Physics", Person::student("Ana", "ana@x.com").unwrap())
            .unwrap_err();

        assert!(matches!(err, RegistryError::CourseNotFound { ref title } if title == "Physics"));
        assert!(registry.courses()[0].participants().is_empty());
    }

    #[test]
    fn test_course_errors_propagate_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = empty_registry(&temp_dir);
        registry
            .add_course(Course::special("Lab", 3, "Goggles").unwrap())
            .unwrap();

        let ana = Person::student("Ana", "ana@x.com").unwrap();
        registry.add_participant("Lab", ana.clone()).unwrap();
        assert!(matches!(
            registry.add_participant("Lab", ana),
            Err(RegistryError::DuplicateParticipant { .. })
        ));
    }

    #[test]
    fn test_first_duplicate_title() {
        let courses = vec![
            Course::online("Math101", 1, "Zoom").unwrap(),
            Course::in_person("Art", 2, "Studio").unwrap(),
            Course::in_person("Math101", 5, "Room 1").unwrap(),
        ];
        assert_eq!(first_duplicate_title(&courses).as_deref(), Some("Math101"));
        assert_eq!(first_duplicate_title(&courses[..2]), None);
    }

    #[test]
    fn test_list_courses() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = empty_registry(&temp_dir);
        assert_eq!(registry.list_courses(), NO_COURSES_MESSAGE);

        registry
            .add_course(Course::online("Math101", 1, "Zoom").unwrap())
            .unwrap();
        registry
            .add_course(Course::in_person("Art", 2, "Studio").unwrap())
            .unwrap();

        let listing = registry.list_courses();
        let math = listing.find("Course: Math101").unwrap();
        let art = listing.find("Course: Art").unwrap();
        assert!(math < art);
        assert!(listing.contains("Platform: Zoom\n\nCourse: Art"));
    }
}
