// ============================================================================
// Aurora - ASCII 机器人
// ============================================================================
//
// 文件: src/ui/robot.rs
// 职责: 随机生成装饰用的 ASCII 机器人
// 边界:
//   - ✅ 机器人部件定义
//   - ✅ 随机组合与可复现生成
//   - ❌ 不应包含颜色渲染
//   - ❌ 不应包含输出目标写入
//
// ============================================================================

use rand::seq::SliceRandom;
use rand::Rng;

// 每个部件宽度一致，保证拼接后左右对齐
const ANTENNAS: &[&str] = &["    o    ", "   \\ /   ", "    |    ", "   _|_   ", "  ~ ~ ~  "];
const HEADS: &[&str] = &["  .---.  ", "  [___]  ", "  /---\\  ", "  {===}  ", "  |~~~|  "];
const EYES: &[&str] = &[
    "  |o o|  ",
    "  |0 0|  ",
    "  |^ ^|  ",
    "  |* *|  ",
    "  |- -|  ",
    "  |@ @|  ",
    "  |x x|  ",
];
const MOUTHS: &[&str] = &["  | - |  ", "  | = |  ", "  | o |  ", "  |___|  ", "  | ~ |  "];
const BODIES: &[&str] = &[
    " /[___]\\ ",
    " d[ + ]b ",
    " <|###|> ",
    " -|[_]|- ",
    " /|:::|\\ ",
];
const LEGS: &[&str] = &["   | |   ", "   / \\   ", "  _| |_  ", "   d b   ", "  (_ _)  "];

/// 使用线程随机数生成一个机器人
pub fn random() -> String {
    generate(&mut rand::thread_rng())
}

/// 使用给定随机源生成机器人，固定种子可复现结果
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> String {
    [ANTENNAS, HEADS, EYES, MOUTHS, BODIES, LEGS]
        .iter()
        .map(|parts| parts.choose(rng).copied().unwrap_or_default())
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn robot_has_one_line_per_part() {
        let robot = random();
        assert_eq!(robot.lines().count(), 6);
        assert!(!robot.ends_with('\n'));
    }

    #[test]
    fn same_seed_builds_same_robot() {
        let first = generate(&mut StdRng::seed_from_u64(7));
        let second = generate(&mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn parts_share_a_width() {
        for parts in [ANTENNAS, HEADS, EYES, MOUTHS, BODIES, LEGS] {
            for part in parts {
                assert_eq!(part.chars().count(), 9, "part {part:?} has wrong width");
            }
        }
    }
}
