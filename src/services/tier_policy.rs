//! 会员等级策略：根据累计购买件数从等级表中选出等级。
//! 阈值与折扣全部来自 `memberships` 表，这里不写死任何数字。

use crate::entities::membership_entity as memberships;

/// 累计件数对应的等级。
///
/// 优先取区间 `[min_items, max_items]` 包含该件数的等级；
/// 若等级表区间有空隙，则取 `min_items <= count` 中 `min_items` 最大的等级。
/// 等级表为空或件数低于所有下限时返回 `None`。
pub fn tier_for(item_count: i64, tiers: &[memberships::Model]) -> Option<&memberships::Model> {
    tiers
        .iter()
        .filter(|t| t.contains(item_count))
        .max_by_key(|t| t.min_items)
        .or_else(|| {
            tiers
                .iter()
                .filter(|t| i64::from(t.min_items) <= item_count)
                .max_by_key(|t| t.min_items)
        })
}

/// 等级名称对应的折扣百分比；未知等级视为无折扣
pub fn discount_for(status: &str, tiers: &[memberships::Model]) -> i32 {
    tiers
        .iter()
        .find(|t| t.status == status)
        .map(|t| t.discount_percentage)
        .unwrap_or(0)
}

/// 由订单上的折扣快照反推等级名称（订单历史展示用）
pub fn status_for_discount(discount: i32, tiers: &[memberships::Model]) -> Option<&str> {
    tiers
        .iter()
        .filter(|t| t.discount_percentage == discount)
        .min_by_key(|t| t.min_items)
        .map(|t| t.status.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(id: i32, status: &str, min: i32, max: Option<i32>, discount: i32) -> memberships::Model {
        memberships::Model {
            id,
            status: status.to_string(),
            min_items: min,
            max_items: max,
            discount_percentage: discount,
            created_at: None,
            updated_at: None,
        }
    }

    fn default_tiers() -> Vec<memberships::Model> {
        vec![
            tier(1, "Bronze", 0, Some(14), 0),
            tier(2, "Silver", 15, Some(29), 15),
            tier(3, "Gold", 30, None, 30),
        ]
    }

    fn status_of(count: i64, tiers: &[memberships::Model]) -> Option<&str> {
        tier_for(count, tiers).map(|t| t.status.as_str())
    }

    #[test]
    fn test_tier_boundaries_are_inclusive() {
        let tiers = default_tiers();
        assert_eq!(status_of(0, &tiers), Some("Bronze"));
        assert_eq!(status_of(14, &tiers), Some("Bronze"));
        assert_eq!(status_of(15, &tiers), Some("Silver"));
        assert_eq!(status_of(29, &tiers), Some("Silver"));
        assert_eq!(status_of(30, &tiers), Some("Gold"));
        assert_eq!(status_of(10_000, &tiers), Some("Gold"));
    }

    #[test]
    fn test_tier_is_monotonic_in_item_count() {
        let tiers = default_tiers();
        let mut last_min = -1;
        for count in 0..100 {
            let current = tier_for(count, &tiers).unwrap();
            assert!(current.min_items >= last_min);
            last_min = current.min_items;
        }
    }

    #[test]
    fn test_tier_table_is_data_driven() {
        let tiers = vec![
            tier(1, "Basic", 0, Some(4), 0),
            tier(2, "Plus", 5, None, 10),
        ];
        assert_eq!(status_of(4, &tiers), Some("Basic"));
        assert_eq!(status_of(5, &tiers), Some("Plus"));
    }

    #[test]
    fn test_gap_falls_back_to_highest_reached_tier() {
        let tiers = vec![
            tier(1, "Bronze", 0, Some(9), 0),
            tier(2, "Silver", 20, None, 15),
        ];
        assert_eq!(status_of(12, &tiers), Some("Bronze"));
        assert_eq!(status_of(20, &tiers), Some("Silver"));
    }

    #[test]
    fn test_empty_table_or_below_all_minimums() {
        assert!(tier_for(3, &[]).is_none());
        let tiers = vec![tier(1, "Silver", 15, None, 15)];
        assert!(tier_for(3, &tiers).is_none());
    }

    #[test]
    fn test_discount_lookup() {
        let tiers = default_tiers();
        assert_eq!(discount_for("Bronze", &tiers), 0);
        assert_eq!(discount_for("Silver", &tiers), 15);
        assert_eq!(discount_for("Gold", &tiers), 30);
        assert_eq!(discount_for("Platinum", &tiers), 0);
    }

    #[test]
    fn test_status_for_discount() {
        let tiers = default_tiers();
        assert_eq!(status_for_discount(15, &tiers), Some("Silver"));
        assert_eq!(status_for_discount(0, &tiers), Some("Bronze"));
        assert_eq!(status_for_discount(42, &tiers), None);
    }
}
