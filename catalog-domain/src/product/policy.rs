/// 商品不变量策略
///
/// 聚合构造与请求校验共用同一份策略，二者的边界值始终一致。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductPolicy {
    /// 名称最大字符数
    pub name_max_chars: usize,
}

impl Default for ProductPolicy {
    fn default() -> Self {
        Self {
            name_max_chars: 100,
        }
    }
}
