use coursebook_core::filter::{FilterCriteria, Record, UNCONSTRAINED_ID, id_matches};
use std::fmt;

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub instructor_id: i64,
    pub name: String,
    pub topics: Vec<String>,
    pub attendees: Vec<i64>,
}

impl Record for Course {
    fn id(&self) -> i64 {
        self.id
    }
}

fn unconstrained() -> i64 {
    UNCONSTRAINED_ID
}

/// `GET /api/v1/courses?topic=<v>...&attendee=<v>...&instructor=<id>`
///
/// `instructor` defaults to [`UNCONSTRAINED_ID`] when omitted or empty; when
/// repeated, the first value wins. Attendees are matched against the course's
/// integer attendee ids rendered as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseFilterParams {
    #[serde(default)]
    pub topic: Vec<String>,
    #[serde(default)]
    pub attendee: Vec<String>,
    #[serde(default = "unconstrained", deserialize_with = "instructor_id")]
    pub instructor: i64,
}

/// Reads the `instructor` query value: empty means unconstrained, anything
/// else must be an integer. Repeated keys arrive as a sequence.
fn instructor_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct InstructorVisitor;

    impl<'de> Visitor<'de> for InstructorVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer instructor id or an empty value")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<i64, E> {
            if value.is_empty() {
                return Ok(UNCONSTRAINED_ID);
            }
            value
                .parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
            i64::try_from(value).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<i64, A::Error> {
            let first = seq.next_element::<String>()?;
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            match first {
                Some(value) => self.visit_str(&value),
                None => Ok(UNCONSTRAINED_ID),
            }
        }
    }

    deserializer.deserialize_any(InstructorVisitor)
}

impl Default for CourseFilterParams {
    fn default() -> Self {
        Self {
            topic: Vec::new(),
            attendee: Vec::new(),
            instructor: UNCONSTRAINED_ID,
        }
    }
}

impl CourseFilterParams {
    pub fn topics(&self) -> FilterCriteria {
        FilterCriteria::new(self.topic.clone())
    }

    pub fn attendees(&self) -> FilterCriteria {
        FilterCriteria::new(self.attendee.clone())
    }

    pub fn admits(&self, course: &Course) -> bool {
        self.topics().matches(&course.topics)
            && self.attendees().matches_ints(&course.attendees)
            && id_matches(self.instructor, course.instructor_id)
    }
}
