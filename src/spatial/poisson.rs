//! 泊松盘采样（Bridson 算法）
//!
//! 在矩形区域内生成近似均匀、两两距离不小于 `min_dist` 的点集。

use std::f32::consts::TAU;

use egui::{Pos2, Vec2};
use rand::Rng;

use super::sample_grid::SampleGrid;
use crate::error::ConfigError;

/// 每个基点生成候选点的默认尝试次数
pub const DEFAULT_ATTEMPTS: usize = 30;

/// 一次采样的结果与统计信息
#[derive(Debug, Clone, Default)]
pub struct SampleReport {
    /// 接受的点，按接受顺序排列
    pub points: Vec<Pos2>,
    /// 生成的候选点总数
    pub attempts: usize,
    /// 被拒绝的候选点数量（越界或距离过近）
    pub rejected: usize,
    /// 因连续失败而移出活动列表的基点数量
    pub exhausted: usize,
}

/// 泊松盘采样器
///
/// 参数在构造时校验，之后的采样不会失败。采样结果完全由传入的随机源决定，
/// 相同种子与参数得到相同的点序列。
///
/// # 示例
/// ```ignore
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let points = PoissonDiskSampler::new(800.0, 600.0, 50.0, 10)?.sample(&mut rng);
/// assert!(points.len() <= 10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PoissonDiskSampler {
    width: f32,
    height: f32,
    min_dist: f32,
    max_points: usize,
    attempts: usize,
    grid_width: usize,
    grid_height: usize,
}

impl PoissonDiskSampler {
    pub fn new(width: f32, height: f32, min_dist: f32, max_points: usize) -> Result<Self, ConfigError> {
        let (grid_width, grid_height) = SampleGrid::dimensions(width, height, min_dist)?;
        if max_points == 0 {
            return Err(ConfigError::ZeroPoints);
        }

        Ok(Self {
            width,
            height,
            min_dist,
            max_points,
            attempts: DEFAULT_ATTEMPTS,
            grid_width,
            grid_height,
        })
    }

    /// 设置每个基点的候选尝试次数
    pub fn with_attempts(mut self, attempts: usize) -> Result<Self, ConfigError> {
        if attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        self.attempts = attempts;
        Ok(self)
    }

    pub fn min_dist(&self) -> f32 {
        self.min_dist
    }

    pub fn max_points(&self) -> usize {
        self.max_points
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// 生成点集，数量不超过 `max_points`
    ///
    /// 区域放不下 `max_points` 个点时返回能放下的部分，这不是错误。
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Pos2> {
        self.sample_with_stats(rng).points
    }

    /// 生成点集并返回统计信息
    pub fn sample_with_stats<R: Rng + ?Sized>(&self, rng: &mut R) -> SampleReport {
        let mut grid = SampleGrid::with_dimensions(self.grid_width, self.grid_height, self.min_dist);
        let mut report = SampleReport {
            // 每个网格单元至多一个点
            points: Vec::with_capacity(self.max_points.min(self.grid_width * self.grid_height)),
            ..Default::default()
        };
        let mut active: Vec<u32> = Vec::new();

        // 从区域中心开始
        let first = Pos2::new(self.width * 0.5, self.height * 0.5);
        grid.insert(first, 0);
        report.points.push(first);
        active.push(0);

        while !active.is_empty() && report.points.len() < self.max_points {
            let slot = rng.random_range(0..active.len());
            let base = report.points[active[slot] as usize];
            let mut found = false;

            for _ in 0..self.attempts {
                report.attempts += 1;

                let angle = rng.random::<f32>() * TAU;
                let radius = self.min_dist * (1.0 + rng.random::<f32>());
                let candidate = base + Vec2::angled(angle) * radius;

                if !self.contains(candidate)
                    || !grid.is_clear(&report.points, candidate, self.min_dist)
                {
                    report.rejected += 1;
                    continue;
                }

                let index = report.points.len() as u32;
                grid.insert(candidate, index);
                report.points.push(candidate);
                active.push(index);
                found = true;
                break;
            }

            if !found {
                // 基点仍保留在输出中，只是不再产生新的候选点
                active.swap_remove(slot);
                report.exhausted += 1;
            }
        }

        log::debug!(
            "poisson sampling: {} of {} points, {} attempts, {} rejected, {} exhausted",
            report.points.len(),
            self.max_points,
            report.attempts,
            report.rejected,
            report.exhausted
        );

        report
    }

    fn contains(&self, p: Pos2) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }
}

/// 便捷函数：校验参数并执行一次泊松盘采样
pub fn sample<R: Rng + ?Sized>(
    width: f32,
    height: f32,
    min_dist: f32,
    max_points: usize,
    rng: &mut R,
) -> Result<Vec<Pos2>, ConfigError> {
    Ok(PoissonDiskSampler::new(width, height, min_dist, max_points)?.sample(rng))
}
