use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CastMember {
    pub name: String,
    #[serde(default)]
    pub character: String,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CrewMember {
    pub name: String,
    #[serde(default)]
    pub job: String,
}

/// Cast in billing order plus crew, as delivered with movie details.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

impl Credits {
    pub fn director(&self) -> Option<&CrewMember> {
        self.crew.iter().find(|c| c.job == "Director")
    }

    pub fn top_cast(&self, n: usize) -> &[CastMember] {
        &self.cast[..self.cast.len().min(n)]
    }
}

/// A production company or a TV network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Company {
    pub name: String,
    pub logo_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cast(name: &str) -> CastMember {
        CastMember {
            name: name.to_string(),
            character: String::new(),
            profile_path: None,
        }
    }

    #[test]
    fn test_director_is_first_director_job() {
        let credits = Credits {
            cast: Vec::new(),
            crew: vec![
                CrewMember { name: "Jim Uhls".to_string(), job: "Screenplay".to_string() },
                CrewMember { name: "David Fincher".to_string(), job: "Director".to_string() },
            ],
        };
        assert_eq!(credits.director().map(|d| d.name.as_str()), Some("David Fincher"));
        assert!(Credits::default().director().is_none());
    }

    #[test]
    fn test_top_cast_caps_without_panicking() {
        let credits = Credits {
            cast: (0..12).map(|i| cast(&format!("Actor {}", i))).collect(),
            crew: Vec::new(),
        };
        assert_eq!(credits.top_cast(10).len(), 10);
        assert_eq!(credits.top_cast(10)[0].name, "Actor 0");
        assert!(Credits::default().top_cast(10).is_empty());
    }
}
