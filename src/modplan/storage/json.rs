//! File-backed storage: one JSON file per collection, replaced via
//! temp-file-then-rename so a crash mid-write never leaves a half-written
//! list behind.

use super::Storage;
use crate::error::Result;
use crate::model::application::Application;
use crate::model::module::Module;
use crate::model::plan::PlannerSlot;
use crate::model::requirement::RequirementCategory;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const MODULES_FILE: &str = "modules.json";
const PLANNER_FILE: &str = "planner.json";
const REQUIREMENTS_FILE: &str = "requirements.json";

pub struct JsonStorage {
    data_dir: PathBuf,
}

impl JsonStorage {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    fn read_collection<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.path(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let bytes = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&bytes)?)
    }

    fn write_collection<T: Serialize>(&self, file: &str, items: &[T]) -> Result<()> {
        let path = self.path(file);
        let tmp = path.with_extension("json.tmp");
        let bytes = serde_json::to_string_pretty(items)?;
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> Result<Option<Application>> {
        let any_present = [MODULES_FILE, PLANNER_FILE, REQUIREMENTS_FILE]
            .iter()
            .any(|file| self.path(file).exists());
        if !any_present {
            return Ok(None);
        }

        let modules: Vec<Module> = self.read_collection(MODULES_FILE)?;
        let planner: Vec<PlannerSlot> = self.read_collection(PLANNER_FILE)?;
        let requirements: Vec<RequirementCategory> = self.read_collection(REQUIREMENTS_FILE)?;
        Application::from_parts(modules, planner, requirements).map(Some)
    }

    fn save(&self, app: &Application) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        self.write_collection(MODULES_FILE, app.modules())?;
        self.write_collection(PLANNER_FILE, app.planner())?;
        self.write_collection(REQUIREMENTS_FILE, app.requirements())?;
        Ok(())
    }
}
