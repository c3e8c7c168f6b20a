//! 采样网格
//!
//! 泊松盘采样使用的均匀网格，格子边长为 `min_dist / √2`，
//! 因此每个格子最多只能容纳一个已接受的点。

use egui::Pos2;

use crate::error::ConfigError;

/// 网格格子数量上限，防止极小间距时分配过大的内存
pub const MAX_GRID_CELLS: usize = 1 << 24;

/// 泊松盘采样网格
///
/// 每个格子记录落在其中的点在输出序列中的索引。
/// 只在一次采样过程中存在，采样结束后即被丢弃。
///
/// # 示例
/// ```ignore
/// let (w, h) = SampleGrid::dimensions(800.0, 600.0, 50.0)?;
/// let mut grid = SampleGrid::with_dimensions(w, h, 50.0);
/// grid.insert(Pos2::new(400.0, 300.0), 0);
/// assert!(!grid.is_clear(&points, Pos2::new(410.0, 300.0), 50.0));
/// ```
#[derive(Debug, Clone)]
pub struct SampleGrid {
    /// 每个格子的尺寸
    cell_size: f32,
    /// 网格列数
    grid_width: usize,
    /// 网格行数
    grid_height: usize,
    /// cells[y * grid_width + x] = 该格子内的点索引
    cells: Vec<Option<u32>>,
}

impl SampleGrid {
    /// 计算覆盖 `width x height` 区域所需的网格尺寸
    ///
    /// 同时完成参数校验：区域与间距必须为有限正数，格子总数不能超过 [`MAX_GRID_CELLS`]。
    pub fn dimensions(width: f32, height: f32, min_dist: f32) -> Result<(usize, usize), ConfigError> {
        super::validate_viewport(width, height)?;
        if !min_dist.is_finite() || min_dist <= 0.0 {
            return Err(ConfigError::InvalidMinDistance(min_dist));
        }

        let cell_size = Self::cell_size_for(min_dist);
        // 先用 f64 计算，避免极小间距时 usize 溢出
        let cols = (width as f64 / cell_size as f64).ceil().max(1.0);
        let rows = (height as f64 / cell_size as f64).ceil().max(1.0);
        let total = cols * rows;
        if total > MAX_GRID_CELLS as f64 {
            return Err(ConfigError::GridTooLarge {
                cells: total.min(usize::MAX as f64) as usize,
                limit: MAX_GRID_CELLS,
            });
        }

        Ok((cols as usize, rows as usize))
    }

    /// 按已校验的尺寸分配网格
    pub fn with_dimensions(grid_width: usize, grid_height: usize, min_dist: f32) -> Self {
        let grid_width = grid_width.max(1);
        let grid_height = grid_height.max(1);
        Self {
            cell_size: Self::cell_size_for(min_dist),
            grid_width,
            grid_height,
            cells: vec![None; grid_width * grid_height],
        }
    }

    /// 格子边长：对角线恰好等于最小间距
    pub fn cell_size_for(min_dist: f32) -> f32 {
        min_dist / std::f32::consts::SQRT_2
    }

    /// 记录一个已接受的点
    pub fn insert(&mut self, pos: Pos2, index: u32) {
        let (gx, gy) = self.cell_of(pos);
        self.cells[gy * self.grid_width + gx] = Some(index);
    }

    /// 检查候选点周围 5x5 邻域内是否存在距离小于 `min_dist` 的点
    ///
    /// 格子边长为 `min_dist / √2`，任何距离小于 `min_dist` 的点
    /// 都必然落在候选点所在格子两格以内。
    pub fn is_clear(&self, points: &[Pos2], candidate: Pos2, min_dist: f32) -> bool {
        let (gx, gy) = self.cell_of(candidate);
        let min_dist_sq = min_dist * min_dist;

        for dy in -2i64..=2 {
            for dx in -2i64..=2 {
                let nx = gx as i64 + dx;
                let ny = gy as i64 + dy;
                if nx < 0 || ny < 0 || nx >= self.grid_width as i64 || ny >= self.grid_height as i64 {
                    continue;
                }

                if let Some(idx) = self.cells[ny as usize * self.grid_width + nx as usize] {
                    if (points[idx as usize] - candidate).length_sq() < min_dist_sq {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// 读取指定格子中的点索引
    pub fn get(&self, gx: usize, gy: usize) -> Option<u32> {
        if gx >= self.grid_width || gy >= self.grid_height {
            return None;
        }
        self.cells[gy * self.grid_width + gx]
    }

    /// 已占用的格子数量
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// 获取格子尺寸
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// 获取网格尺寸
    pub fn grid_dimensions(&self) -> (usize, usize) {
        (self.grid_width, self.grid_height)
    }

    /// 将点坐标转换为网格坐标（越界时夹到边缘格子）
    pub fn cell_of(&self, pos: Pos2) -> (usize, usize) {
        let x = (pos.x / self.cell_size)
            .floor()
            .max(0.0)
            .min((self.grid_width - 1) as f32) as usize;
        let y = (pos.y / self.cell_size)
            .floor()
            .max(0.0)
            .min((self.grid_height - 1) as f32) as usize;
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let (w, h) = SampleGrid::dimensions(800.0, 600.0, 50.0).unwrap();
        let cell = 50.0 / std::f32::consts::SQRT_2;
        assert_eq!(w, (800.0 / cell).ceil() as usize);
        assert_eq!(h, (600.0 / cell).ceil() as usize);
    }

    #[test]
    fn test_dimensions_rejects_bad_input() {
        assert!(matches!(
            SampleGrid::dimensions(800.0, 600.0, 0.0),
            Err(ConfigError::InvalidMinDistance(_))
        ));
        assert!(matches!(
            SampleGrid::dimensions(-1.0, 600.0, 10.0),
            Err(ConfigError::InvalidViewport { .. })
        ));
        assert!(matches!(
            SampleGrid::dimensions(1.0e6, 1.0e6, 0.01),
            Err(ConfigError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn test_insert_and_lookup() {
        let (w, h) = SampleGrid::dimensions(100.0, 100.0, 10.0).unwrap();
        let mut grid = SampleGrid::with_dimensions(w, h, 10.0);
        let p = Pos2::new(25.0, 61.0);
        grid.insert(p, 7);

        let (gx, gy) = grid.cell_of(p);
        assert_eq!(grid.get(gx, gy), Some(7));
        assert_eq!(grid.occupied(), 1);
        assert_eq!(grid.get(w, 0), None);
    }

    #[test]
    fn test_is_clear() {
        let points = vec![Pos2::new(50.0, 50.0)];
        let (w, h) = SampleGrid::dimensions(100.0, 100.0, 10.0).unwrap();
        let mut grid = SampleGrid::with_dimensions(w, h, 10.0);
        grid.insert(points[0], 0);

        // 距离 5，太近
        assert!(!grid.is_clear(&points, Pos2::new(55.0, 50.0), 10.0));
        // 距离恰好 10，可以接受
        assert!(grid.is_clear(&points, Pos2::new(60.0, 50.0), 10.0));
        // 对角方向两格以外
        assert!(grid.is_clear(&points, Pos2::new(62.0, 62.0), 10.0));
    }

    #[test]
    fn test_cell_of_clamps_edges() {
        let (w, h) = SampleGrid::dimensions(100.0, 50.0, 10.0).unwrap();
        let grid = SampleGrid::with_dimensions(w, h, 10.0);
        assert_eq!(grid.cell_of(Pos2::new(-5.0, -5.0)), (0, 0));
        assert_eq!(grid.cell_of(Pos2::new(1000.0, 1000.0)), (w - 1, h - 1));
    }
}
