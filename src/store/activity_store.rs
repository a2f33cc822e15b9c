use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::Activity;

pub type Directory = BTreeMap<String, Activity>;

/// Shared in-memory catalogue. Cloning the handle shares the same map, so
/// the router state and every handler see one directory. Activities are
/// fixed after construction; only participant sets change.
#[derive(Clone)]
pub struct ActivityStore {
    inner: Arc<RwLock<Directory>>,
}

impl ActivityStore {
    pub fn new(directory: Directory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(directory)),
        }
    }

    /// Store pre-filled with the school's fixed activity catalogue.
    pub fn seeded() -> Self {
        Self::new(seed_directory())
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Directory> {
        self.inner.read().expect("activity directory lock poisoned")
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Directory> {
        self.inner.write().expect("activity directory lock poisoned")
    }

    pub fn snapshot(&self) -> Directory {
        self.read().clone()
    }
}

fn seed_directory() -> Directory {
    let mut directory = Directory::new();
    directory.insert(
        "Chess Club".to_string(),
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            ["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );
    directory.insert(
        "Programming Class".to_string(),
        Activity::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            ["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    );
    directory.insert(
        "Gym Class".to_string(),
        Activity::new(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            ["john@mergington.edu", "olivia@mergington.edu"],
        ),
    );
    directory.insert(
        "Debate Club".to_string(),
        Activity::new(
            "Develop public speaking and argumentation skills",
            "Wednesdays, 4:00 PM - 5:30 PM",
            16,
            ["ava@mergington.edu", "noah@mergington.edu"],
        ),
    );
    directory.insert(
        "Art Club".to_string(),
        Activity::new(
            "Explore drawing, painting and other visual arts",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            ["amelia@mergington.edu"],
        ),
    );
    directory.insert(
        "Math Olympiad".to_string(),
        Activity::new(
            "Train for regional and national math competitions",
            "Saturdays, 10:00 AM - 12:00 PM",
            10,
            ["lucas@mergington.edu", "harper@mergington.edu"],
        ),
    );
    directory
}
