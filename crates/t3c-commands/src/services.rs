// Rust guideline compliant 2026-10-18

//! Services that command factories draw from.
//!
//! A [`Container`] hands out the boot service and the configuration
//! manager through typed accessors. [`StaticContainer`] is the concrete
//! container used by the binary; tests supply their own.

use crate::error::{CommandError, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Reports whether an installation is configured.
pub trait ConfigurationManager: fmt::Debug + Send + Sync {
    /// Returns whether the essential configuration files exist.
    fn essential_configuration_exists(&self) -> bool;
}

/// Brings the full system up for commands that need it.
pub trait BootService: fmt::Debug + Send + Sync {
    /// Boots the system.
    ///
    /// # Errors
    /// Returns [`CommandError::Boot`] if the system cannot be started.
    fn boot(&self) -> Result<()>;
}

/// Typed access to the services command factories need.
pub trait Container {
    /// Fetches the boot service.
    ///
    /// # Errors
    /// Returns [`CommandError::Container`] if the service is unavailable.
    fn boot_service(&self) -> Result<Arc<dyn BootService>>;

    /// Fetches the configuration manager.
    ///
    /// # Errors
    /// Returns [`CommandError::Container`] if the service is unavailable.
    fn configuration_manager(&self) -> Result<Arc<dyn ConfigurationManager>>;
}

/// Whether the installation has its essential configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    NotReady,
}

impl Readiness {
    /// Asks the container's configuration manager once.
    ///
    /// # Errors
    /// Propagates the container's error if the manager is unavailable.
    pub fn detect(container: &dyn Container) -> Result<Self> {
        let manager = container.configuration_manager()?;
        let readiness = Readiness::from(manager.essential_configuration_exists());
        debug!(?readiness, "Detected installation readiness");
        Ok(readiness)
    }

    /// Returns `true` for [`Readiness::Ready`].
    pub fn is_ready(self) -> bool {
        self == Readiness::Ready
    }
}

impl From<bool> for Readiness {
    fn from(ready: bool) -> Self {
        if ready {
            Readiness::Ready
        } else {
            Readiness::NotReady
        }
    }
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Readiness::Ready => f.write_str("ready"),
            Readiness::NotReady => f.write_str("not ready"),
        }
    }
}

/// Checks configuration files on disk under a project root.
#[derive(Debug, Clone)]
pub struct FileConfigurationManager {
    project_root: PathBuf,
    settings_file: PathBuf,
    package_states_file: Option<PathBuf>,
}

impl FileConfigurationManager {
    /// Creates a manager for the given project.
    ///
    /// # Arguments
    /// * `project_root` - Installation directory
    /// * `settings_file` - Settings file, relative to the root
    /// * `package_states_file` - Package states file that must also exist, if any
    pub fn new(
        project_root: impl Into<PathBuf>,
        settings_file: impl Into<PathBuf>,
        package_states_file: Option<PathBuf>,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            settings_file: settings_file.into(),
            package_states_file,
        }
    }

    /// Project root directory.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Absolute path of the settings file.
    pub fn settings_path(&self) -> PathBuf {
        self.project_root.join(&self.settings_file)
    }

    /// Absolute path of the package states file, when one is required.
    pub fn package_states_path(&self) -> Option<PathBuf> {
        self.package_states_file
            .as_ref()
            .map(|file| self.project_root.join(file))
    }

    /// Every file the installation needs, in check order.
    pub fn required_paths(&self) -> Vec<PathBuf> {
        let mut paths = vec![self.settings_path()];
        paths.extend(self.package_states_path());
        paths
    }
}

impl ConfigurationManager for FileConfigurationManager {
    fn essential_configuration_exists(&self) -> bool {
        self.required_paths().iter().all(|path| path.is_file())
    }
}

/// Boot service that refuses to start an unconfigured installation.
#[derive(Debug)]
pub struct ProjectBootService {
    configuration: Arc<dyn ConfigurationManager>,
    booted: AtomicBool,
}

impl ProjectBootService {
    /// Creates a boot service guarded by the given configuration manager.
    pub fn new(configuration: Arc<dyn ConfigurationManager>) -> Self {
        Self {
            configuration,
            booted: AtomicBool::new(false),
        }
    }

    /// Returns whether [`BootService::boot`] has succeeded.
    pub fn is_booted(&self) -> bool {
        self.booted.load(Ordering::SeqCst)
    }
}

impl BootService for ProjectBootService {
    fn boot(&self) -> Result<()> {
        if !self.configuration.essential_configuration_exists() {
            return Err(CommandError::Boot(
                "essential configuration is missing".to_string(),
            ));
        }
        if !self.booted.swap(true, Ordering::SeqCst) {
            debug!("Booted project");
        }
        Ok(())
    }
}

/// Container holding pre-built services.
#[derive(Debug, Clone)]
pub struct StaticContainer {
    configuration: Arc<dyn ConfigurationManager>,
    boot: Arc<dyn BootService>,
}

impl StaticContainer {
    /// Creates a container from concrete services.
    pub fn new(configuration: Arc<dyn ConfigurationManager>, boot: Arc<dyn BootService>) -> Self {
        Self {
            configuration,
            boot,
        }
    }

    /// Wires a [`FileConfigurationManager`] and a [`ProjectBootService`]
    /// for the given project.
    pub fn for_project(manager: FileConfigurationManager) -> Self {
        let configuration: Arc<dyn ConfigurationManager> = Arc::new(manager);
        let boot = Arc::new(ProjectBootService::new(Arc::clone(&configuration)));
        Self::new(configuration, boot)
    }
}

impl Container for StaticContainer {
    fn boot_service(&self) -> Result<Arc<dyn BootService>> {
        Ok(Arc::clone(&self.boot))
    }

    fn configuration_manager(&self) -> Result<Arc<dyn ConfigurationManager>> {
        Ok(Arc::clone(&self.configuration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, relative: &str) {
        let path = dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<?php\nreturn [];\n").unwrap();
    }

    #[test]
    fn test_missing_settings_is_not_ready() {
        let dir = TempDir::new().unwrap();
        let manager = FileConfigurationManager::new(dir.path(), "config/system/settings.php", None);
        assert!(!manager.essential_configuration_exists());
    }

    #[test]
    fn test_settings_present_is_ready() {
        let dir = TempDir::new().unwrap();
        write(&dir, "config/system/settings.php");
        let manager = FileConfigurationManager::new(dir.path(), "config/system/settings.php", None);
        assert!(manager.essential_configuration_exists());
    }

    #[test]
    fn test_package_states_required_when_configured() {
        let dir = TempDir::new().unwrap();
        write(&dir, "config/system/settings.php");
        let manager = FileConfigurationManager::new(
            dir.path(),
            "config/system/settings.php",
            Some(PathBuf::from("typo3conf/PackageStates.php")),
        );
        assert!(!manager.essential_configuration_exists());
        assert_eq!(manager.required_paths().len(), 2);

        write(&dir, "typo3conf/PackageStates.php");
        assert!(manager.essential_configuration_exists());
    }

    #[test]
    fn test_directory_does_not_count_as_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("config/system/settings.php")).unwrap();
        let manager = FileConfigurationManager::new(dir.path(), "config/system/settings.php", None);
        assert!(!manager.essential_configuration_exists());
    }

    #[test]
    fn test_boot_requires_configuration() {
        let dir = TempDir::new().unwrap();
        let container = StaticContainer::for_project(FileConfigurationManager::new(
            dir.path(),
            "settings.php",
            None,
        ));
        let boot = container.boot_service().unwrap();
        assert!(matches!(boot.boot(), Err(CommandError::Boot(_))));

        write(&dir, "settings.php");
        boot.boot().unwrap();
        assert_eq!(Readiness::detect(&container).unwrap(), Readiness::Ready);
    }

    #[test]
    fn test_project_boot_service_tracks_state() {
        let dir = TempDir::new().unwrap();
        write(&dir, "settings.php");
        let manager: Arc<dyn ConfigurationManager> =
            Arc::new(FileConfigurationManager::new(dir.path(), "settings.php", None));
        let boot = ProjectBootService::new(manager);
        assert!(!boot.is_booted());
        boot.boot().unwrap();
        assert!(boot.is_booted());
    }

    #[test]
    fn test_readiness_display() {
        assert_eq!(Readiness::Ready.to_string(), "ready");
        assert_eq!(Readiness::from(false), Readiness::NotReady);
        assert!(!Readiness::NotReady.is_ready());
    }
}
