use crate::sys::error::SysError;
use crate::sys::proc;

const CPU_INFO_PATH: &str = "/proc/cpuinfo";

/// Processor details, taken from the first processor listed in `/proc/cpuinfo`.
///
/// Fields the kernel doesn't report for the current architecture are left empty or zero.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CpuInfo {
    pub vendor_id: String,
    pub model_name: String,
    pub microcode: String,
    /// The number of logical processors, one per `processor` entry.
    pub virtual_cores: usize,
    pub physical_cores: u32,
    pub model: u32,
    pub stepping: u32,
}

impl CpuInfo {
    /// Parses the contents of a `/proc/cpuinfo` file.
    ///
    /// Keys are matched exactly, so `model name` is never mistaken for `model`. Only the values
    /// of the first processor are kept, while every processor counts towards
    /// [`virtual_cores`](CpuInfo::virtual_cores).
    ///
    /// # Errors
    /// Returns [`SysError::Field`] if a numeric field of the first processor can't be parsed.
    ///
    /// # Examples
    /// ```
    /// # use zen::sys::CpuInfo;
    /// let info = CpuInfo::parse("processor\t: 0\nmodel\t\t: 158\nmodel name\t: Example CPU\n\n\
    ///     processor\t: 1\nmodel\t\t: 158\n").unwrap();
    /// assert_eq!(info.model, 158);
    /// assert_eq!(info.model_name, "Example CPU");
    /// assert_eq!(info.virtual_cores, 2);
    /// ```
    pub fn parse(content: &str) -> Result<CpuInfo, SysError> {
        let mut info = CpuInfo::default();

        for (key, value) in content.lines().filter_map(proc::key_value) {
            if key == "processor" {
                info.virtual_cores += 1;
                continue;
            }
            if info.virtual_cores > 1 {
                continue;
            }

            match key {
                "vendor_id" => info.vendor_id = value.to_owned(),
                "model name" => info.model_name = value.to_owned(),
                "microcode" => info.microcode = value.to_owned(),
                "cpu cores" => info.physical_cores = proc::parse_field("cpu cores", value)?,
                "model" => info.model = proc::parse_field("model", value)?,
                "stepping" => info.stepping = proc::parse_field("stepping", value)?,
                _ => (),
            }
        }

        log::trace!("parsed {} processor entries", info.virtual_cores);
        Ok(info)
    }
}

/// Reads and parses `/proc/cpuinfo`.
pub fn read_cpu_info() -> Result<CpuInfo, SysError> {
    CpuInfo::parse(&proc::read_file(CPU_INFO_PATH)?)
}
