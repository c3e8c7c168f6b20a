//! 中心留白的随机散布
//!
//! 在视口内侧区域均匀随机放置点，但避开中心竖直带，
//! 适合前景中央有内容、装饰元素只出现在两侧的布局。
//! 不保证点之间的最小间距。

use egui::Pos2;
use rand::Rng;

use super::MAX_GRID_CELLS;
use crate::error::ConfigError;

/// 单次散布的点数上限
pub const MAX_SCATTER_POINTS: usize = MAX_GRID_CELLS;

#[derive(Debug, Clone, Copy)]
pub struct CenterClearScatter {
    width: f32,
    height: f32,
    /// 四周留出的边距（占宽/高的比例）
    margin: f32,
    /// 中心竖直带的半宽（占宽度的比例）
    clear_band: f32,
}

impl CenterClearScatter {
    pub fn new(width: f32, height: f32, margin: f32, clear_band: f32) -> Result<Self, ConfigError> {
        super::validate_viewport(width, height)?;

        let valid = margin.is_finite()
            && clear_band.is_finite()
            && margin >= 0.0
            && clear_band >= 0.0
            && margin + clear_band < 0.5;
        if !valid {
            return Err(ConfigError::InvalidPlacement { margin, clear_band });
        }

        Ok(Self {
            width,
            height,
            margin,
            clear_band,
        })
    }

    /// 生成恰好 `count` 个点，超过 [`MAX_SCATTER_POINTS`] 的部分被截断
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Pos2> {
        let w = self.width;
        let h = self.height;

        // 左右两条可用竖带的宽度
        let strip = w * (0.5 - self.margin - self.clear_band);
        let left = w * self.margin;
        let right = w * (0.5 + self.clear_band);

        (0..count.min(MAX_SCATTER_POINTS))
            .map(|_| {
                let u = rng.random::<f32>() * 2.0 * strip;
                let x = if u < strip { left + u } else { right + (u - strip) };
                let y = h * self.margin + rng.random::<f32>() * h * (1.0 - 2.0 * self.margin);
                Pos2::new(x, y)
            })
            .collect()
    }
}
