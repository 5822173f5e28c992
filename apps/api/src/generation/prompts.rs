// All LLM prompt constants for the Generation module.

/// System prompt for job-description generation.
pub const GENERATION_SYSTEM: &str =
    "あなたは米国ビザ申請書に適した職務内容を日本語で生成するアシスタントです。";

/// Generation prompt template.
/// Replace: {position}, {industry}, {department}, {reference_block}
pub const GENERATION_PROMPT_TEMPLATE: &str = "以下の条件に合致する、米国ビザ申請書に記載する職務内容を10件、日本語で作成してください。
- ポジション:{position}
- 業界:{industry}
- 部門:{department}
{reference_block}
制約:
- 参考サンプルと同じような文体、長さ、具体性のレベルで記述すること
- 各文は1~2文以内で簡潔に、業務内容を具体的に記述すること
- 文体は「です・ます調」ではなく、体言止めや「~する」などの常体で統一すること
- 文末表現は「~を行う」「~に関与」「~を担当」「~の実施」「~を図る」「~を推進」などを使用すること
- 参考サンプルの表現スタイルを模倣しつつ、指定された条件に合った内容を生成すること
- 箇条書きで10件を番号付きリストで出力すること
";

/// Heading of the reference block; each sample follows as a numbered line.
pub const REFERENCE_HEADER: &str =
    "\n\n【参考サンプル】以下のような文体・粒度・表現を参考にして作成してください:\n";
