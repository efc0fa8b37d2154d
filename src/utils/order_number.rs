use rand::Rng;

const ORDER_NUMBER_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// 生成指定长度的小写字母数字订单号（不检查唯一性）
pub fn generate_order_number(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..ORDER_NUMBER_CHARSET.len());
            char::from(ORDER_NUMBER_CHARSET[idx])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_order_number_format() {
        let number = generate_order_number(8);
        assert_eq!(number.len(), 8);
        assert!(
            number
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn test_generate_order_number_respects_length() {
        assert_eq!(generate_order_number(12).len(), 12);
        assert!(generate_order_number(0).is_empty());
    }
}
