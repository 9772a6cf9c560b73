use crate::core::persistence::LoadStatus;
use crate::core::registry::Registry;
use crate::domain::model::{Course, Person, Role};
use crate::domain::ports::Storage;
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::parse_integer;
use std::io::{BufRead, Write};

const MENU: &str = "=== Course Registry ===
1. Register course
2. Register student or teacher
3. List courses
4. Save data
5. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddCourse,
    AddParticipant,
    ListCourses,
    Save,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddCourse),
            "2" => Some(MenuChoice::AddParticipant),
            "3" => Some(MenuChoice::ListCourses),
            "4" => Some(MenuChoice::Save),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Line-oriented console front end. Any `BufRead`/`Write` pair works, so
/// sessions can be scripted.
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the user exits or input ends; both save before returning.
    /// Only failures writing to the console escape this loop.
    pub fn run<S: Storage>(&mut self, registry: &mut Registry<S>) -> Result<()> {
        if let LoadStatus::Recovered(reason) = registry.load_status() {
            writeln!(
                self.output,
                "Could not load saved data ({}); starting with an empty registry.",
                reason
            )?;
        }

        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(line) = self.prompt("Choose an option")? else {
                tracing::debug!("Input closed, exiting");
                self.exit(registry)?;
                return Ok(());
            };

            let flow = match MenuChoice::parse(&line) {
                Some(choice) => {
                    tracing::debug!("Menu choice {:?}", choice);
                    match self.dispatch(choice, registry) {
                        Ok(flow) => flow,
                        Err(e) => {
                            self.report(&e)?;
                            Flow::Continue
                        }
                    }
                }
                None => {
                    writeln!(self.output, "Invalid option. Try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
            writeln!(self.output)?;
        }
    }

    fn dispatch<S: Storage>(
        &mut self,
        choice: MenuChoice,
        registry: &mut Registry<S>,
    ) -> Result<Flow> {
        match choice {
            MenuChoice::AddCourse => self.register_course(registry),
            MenuChoice::AddParticipant => self.register_participant(registry),
            MenuChoice::ListCourses => {
                writeln!(self.output, "{}", registry.list_courses())?;
                Ok(Flow::Continue)
            }
            MenuChoice::Save => {
                registry.save_all()?;
                writeln!(self.output, "Data saved successfully!")?;
                Ok(Flow::Continue)
            }
            MenuChoice::Exit => {
                self.exit(registry)?;
                Ok(Flow::Exit)
            }
        }
    }

    fn register_course<S: Storage>(&mut self, registry: &mut Registry<S>) -> Result<Flow> {
        let Some(title) = self.prompt("Course title")? else {
            return self.exit(registry).map(|_| Flow::Exit);
        };
        let Some(capacity) = self.prompt("Maximum capacity")? else {
            return self.exit(registry).map(|_| Flow::Exit);
        };
        let capacity = parse_integer(&capacity)?;

        let Some(kind) = self.prompt("Course type (1 - Online, 2 - In person)")? else {
            return self.exit(registry).map(|_| Flow::Exit);
        };
        let course = match kind.trim() {
            "1" => {
                let Some(platform) = self.prompt("Online course platform")? else {
                    return self.exit(registry).map(|_| Flow::Exit);
                };
                Course::online(title, capacity, platform)?
            }
            "2" => {
                let Some(location) = self.prompt("In-person course location")? else {
                    return self.exit(registry).map(|_| Flow::Exit);
                };
                Course::in_person(title, capacity, location)?
            }
            _ => {
                writeln!(self.output, "Invalid course type.")?;
                return Ok(Flow::Continue);
            }
        };

        let title = course.title().to_string();
        registry.add_course(course)?;
        writeln!(self.output, "Course '{}' added successfully!", title)?;
        Ok(Flow::Continue)
    }

    fn register_participant<S: Storage>(&mut self, registry: &mut Registry<S>) -> Result<Flow> {
        let Some(title) = self.prompt("Course title")? else {
            return self.exit(registry).map(|_| Flow::Exit);
        };
        let Some(kind) = self.prompt("Participant type (1 - Student, 2 - Teacher)")? else {
            return self.exit(registry).map(|_| Flow::Exit);
        };
        let Some(name) = self.prompt("Name")? else {
            return self.exit(registry).map(|_| Flow::Exit);
        };
        let Some(email) = self.prompt("Email")? else {
            return self.exit(registry).map(|_| Flow::Exit);
        };

        let role = match kind.trim() {
            "1" => Role::Student,
            "2" => Role::Teacher,
            _ => {
                writeln!(self.output, "Invalid participant type.")?;
                return Ok(Flow::Continue);
            }
        };

        let participant = Person::new(role, name, email)?;
        let name = participant.name().to_string();
        registry.add_participant(&title, participant)?;
        writeln!(self.output, "{} was added to course '{}'.", name, title)?;
        Ok(Flow::Continue)
    }

    fn exit<S: Storage>(&mut self, registry: &Registry<S>) -> Result<()> {
        match registry.save_all() {
            Ok(()) => writeln!(self.output, "Data saved. Goodbye!")?,
            Err(e) => {
                self.report(&e)?;
                writeln!(self.output, "Goodbye!")?;
            }
        }
        Ok(())
    }

    fn report(&mut self, error: &RegistryError) -> Result<()> {
        if error.is_expected() {
            writeln!(self.output, "Error: {}", error)?;
        } else {
            tracing::debug!("Unexpected error: {:?}", error);
            writeln!(self.output, "Unexpected error: {}", error)?;
        }
        Ok(())
    }

    /// `None` once input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
