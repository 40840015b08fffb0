//! Built-in sample document.

use crate::normalize::escape_newlines;

/// A short report with headings, a table and a closing line.
pub const SAMPLE_MARKDOWN: &str = "# 穿黃色衣服的人影像報告

## 特約永和中正門市影像資料
在特約永和中正門市中，穿著黃色衣服的顧客影像如下：

| 影像來源 | 影像鏈接 |
| -------- | -------- |
| ECC100-特約竹東長春二-櫃台Camera | 影像1 |
| ECC100-特約竹東長春二-櫃台Camera | 影像2 |
| ECC100-特約竹東長春二-櫃台Camera | 影像3 |
| ECC100-特約永和中正-櫃台Camera | 影像4 |
| ECC100-特約永和中正-櫃台Camera | 影像5 |
| ECC100-特約永和中正-櫃台Camera | 影像6 |

更多影像可供檢視，請參考各鏈接。";

/// The sample as it arrives over a JSON transport: one line, `\n` escapes.
pub fn sample_input() -> String {
    escape_newlines(SAMPLE_MARKDOWN)
}
