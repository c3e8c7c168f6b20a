//! 空间采样模块
//!
//! 为漂浮元素生成初始锚点：
//! - 泊松盘采样：近似均匀、两两距离不小于给定间距
//! - 中心留白散布：随机放置在视口两侧，不保证间距
//!
//! # 主要类型
//! - [`PoissonDiskSampler`][]: Bridson 泊松盘采样器
//! - [`SampleGrid`][]: 采样期间使用的均匀网格
//! - [`CenterClearScatter`][]: 中心留白的随机散布

mod poisson;
mod sample_grid;
mod scatter;

pub use poisson::{sample, PoissonDiskSampler, SampleReport, DEFAULT_ATTEMPTS};
pub use sample_grid::{SampleGrid, MAX_GRID_CELLS};
pub use scatter::{CenterClearScatter, MAX_SCATTER_POINTS};

use crate::error::ConfigError;

/// 校验视口尺寸：必须为有限正数
pub fn validate_viewport(width: f32, height: f32) -> Result<(), ConfigError> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidViewport { width, height })
    }
}
