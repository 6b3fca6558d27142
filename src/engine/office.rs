//! Automation host: a headless LibreOffice instance owned by one conversion.
//!
//! [`OfficeHost`] is the scoped handle. It owns a private user profile so the
//! spawned `soffice` never attaches to (or is kept alive by) an instance the
//! user already has open, and every process it starts is wrapped in a
//! [`HostProcess`] guard that kills and reaps the child when dropped. A
//! conversion that fails midway, returns early through `?`, or panics
//! therefore cannot leave a host process or lock file behind.
//!
//! The host always runs headless; no window is ever shown.

use crate::config::ConversionConfig;
use crate::error::ConvertError;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use tempfile::TempDir;
use tracing::{debug, info, instrument, warn};

const ENGINE: &str = "office host";

/// Exclusive handle on a headless office host for one conversion.
pub struct OfficeHost {
    binary: PathBuf,
    profile: TempDir,
}

impl OfficeHost {
    /// Prepare a host with a fresh private profile. No process is started
    /// until a document is converted.
    pub fn start(config: &ConversionConfig) -> Result<Self, ConvertError> {
        let profile = config.scratch()?;
        debug!(
            "Office host profile at {} (binary {})",
            profile.path().display(),
            config.office_binary.display()
        );
        Ok(Self {
            binary: config.office_binary.clone(),
            profile,
        })
    }

    /// Export `input` as PDF into `outdir`, returning the produced file.
    #[instrument(skip(self), fields(input = %input.display()))]
    pub fn export_pdf(&self, input: &Path, outdir: &Path) -> Result<PathBuf, ConvertError> {
        self.convert_to(input, "pdf", outdir)
    }

    /// Run one `--convert-to` job and wait for the host to quit.
    fn convert_to(&self, input: &Path, filter: &str, outdir: &Path) -> Result<PathBuf, ConvertError> {
        let mut cmd = Command::new(&self.binary);
        cmd.arg("--headless")
            .arg("--invisible")
            .arg("--norestore")
            .arg("--nolockcheck")
            .arg("--nodefault")
            .arg(format!("-env:UserInstallation={}", file_url(self.profile.path())))
            .arg("--convert-to")
            .arg(filter)
            .arg("--outdir")
            .arg(outdir)
            .arg(input);

        let host = HostProcess::spawn(&mut cmd).map_err(|e| ConvertError::EngineUnavailable {
            engine: ENGINE,
            detail: format!("cannot start '{}': {e}", self.binary.display()),
        })?;
        info!("Office host started (pid {})", host.id());

        let (status, stderr) = host
            .wait()
            .map_err(|e| ConvertError::engine(ENGINE, format!("lost contact with host: {e}")))?;

        if !status.success() {
            return Err(ConvertError::engine(ENGINE, failure_detail(status, &stderr)));
        }

        let stem = input
            .file_stem()
            .ok_or_else(|| ConvertError::Internal(format!("no file name in '{}'", input.display())))?;
        let extension = filter.split(':').next().unwrap_or(filter);
        let produced = outdir.join(format!("{}.{extension}", stem.to_string_lossy()));

        match std::fs::metadata(&produced) {
            Ok(meta) if meta.len() > 0 => {
                debug!("Host wrote {} ({} bytes)", produced.display(), meta.len());
                Ok(produced)
            }
            // soffice exits 0 even when it could not load the document.
            _ => Err(ConvertError::engine(
                ENGINE,
                if stderr.trim().is_empty() {
                    format!("no output produced for '{}'", input.display())
                } else {
                    stderr.trim().to_string()
                },
            )),
        }
    }
}

fn failure_detail(status: ExitStatus, stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        format!("host exited with {status}")
    } else {
        stderr.to_string()
    }
}

/// `file://` URL for a local directory, as soffice expects for
/// `-env:UserInstallation`.
fn file_url(path: &Path) -> String {
    let s = path.to_string_lossy().replace('\\', "/").replace(' ', "%20");
    if s.starts_with('/') {
        format!("file://{s}")
    } else {
        format!("file:///{s}")
    }
}

// ── Process guard ────────────────────────────────────────────────────────────

/// A child process that is killed and reaped on drop unless it was waited
/// for to completion.
pub(crate) struct HostProcess {
    child: Option<Child>,
    pid: u32,
}

impl HostProcess {
    pub(crate) fn spawn(cmd: &mut Command) -> io::Result<Self> {
        let child = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()?;
        let pid = child.id();
        Ok(Self {
            child: Some(child),
            pid,
        })
    }

    pub(crate) fn id(&self) -> u32 {
        self.pid
    }

    /// Block until the process exits, collecting its stderr.
    pub(crate) fn wait(mut self) -> io::Result<(ExitStatus, String)> {
        let child = self
            .child
            .as_mut()
            .ok_or_else(|| io::Error::other("host process already reaped"))?;

        let mut stderr = String::new();
        if let Some(mut pipe) = child.stderr.take() {
            pipe.read_to_string(&mut stderr)?;
        }
        let status = child.wait()?;
        self.child = None;
        Ok((status, stderr))
    }
}

impl Drop for HostProcess {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            warn!("Terminating office host (pid {})", self.pid);
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_url_forms() {
        assert_eq!(file_url(Path::new("/tmp/a b")), "file:///tmp/a%20b");
        assert_eq!(file_url(Path::new("C:\\Temp\\x")), "file:///C:/Temp/x");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn dropped_guard_kills_and_reaps_child() {
        let host = HostProcess::spawn(Command::new("sleep").arg("30")).unwrap();
        let proc_dir = PathBuf::from(format!("/proc/{}", host.id()));
        assert!(proc_dir.exists());
        drop(host);
        assert!(!proc_dir.exists(), "host process survived its guard");
    }

    #[cfg(unix)]
    #[test]
    fn waited_guard_reports_status() {
        let host = HostProcess::spawn(&mut Command::new("true")).unwrap();
        let (status, stderr) = host.wait().unwrap();
        assert!(status.success());
        assert!(stderr.is_empty());
    }

    #[test]
    fn missing_host_binary_is_unavailable() {
        let config = ConversionConfig::builder()
            .office_binary("/definitely/not/soffice")
            .build()
            .unwrap();
        let host = OfficeHost::start(&config).unwrap();
        let out = tempfile::tempdir().unwrap();
        let err = host
            .export_pdf(Path::new("/tmp/whatever.docx"), out.path())
            .unwrap_err();
        assert!(matches!(err, ConvertError::EngineUnavailable { .. }), "got: {err}");
    }

    #[cfg(unix)]
    #[test]
    fn failing_host_is_engine_failure_and_profile_is_removed() {
        let config = ConversionConfig::builder()
            .office_binary("false")
            .build()
            .unwrap();
        let host = OfficeHost::start(&config).unwrap();
        let profile = host.profile.path().to_path_buf();
        let out = tempfile::tempdir().unwrap();

        let err = host
            .export_pdf(Path::new("/tmp/whatever.docx"), out.path())
            .unwrap_err();
        assert!(matches!(err, ConvertError::EngineFailed { .. }), "got: {err}");

        drop(host);
        assert!(!profile.exists());
        assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_without_output_is_failure() {
        let config = ConversionConfig::builder()
            .office_binary("true")
            .build()
            .unwrap();
        let host = OfficeHost::start(&config).unwrap();
        let out = tempfile::tempdir().unwrap();
        let err = host
            .export_pdf(Path::new("/tmp/slides.pptx"), out.path())
            .unwrap_err();
        assert!(err.to_string().contains("no output produced"), "got: {err}");
    }
}
