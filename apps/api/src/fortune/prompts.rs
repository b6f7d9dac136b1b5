// Prompt text for fortune generation.
// The Korean boilerplate is product copy; keep it byte-for-byte stable.

use crate::fortune::category::{guide_for_label, resolve_label};
use crate::fortune::models::FortuneRequest;

/// System message sent with every fortune request.
pub const SYSTEM_PROMPT: &str = "당신은 친근하고 지혜로운 사주 전문가입니다. \
    전통적인 사주 이론과 십이지 띠의 특성을 현대적이고 긍정적인 방식으로 해석해주세요.";

const PROMPT_HEADER: &str = "당신은 전문 사주 명리학자입니다. 다음 정보를 바탕으로 운세를 봐주세요:";

/// A fully assembled user prompt plus the intermediate pieces, for logging and tests.
#[derive(Debug, Clone)]
pub struct FortunePrompt<'a> {
    /// Resolved labels in request order. Unknown keys appear verbatim.
    pub selected_types: Vec<&'a str>,
    /// `selected_types` joined with ", ".
    pub summary: String,
    /// One "\n- {label}: {guide}" line per label that has guidance.
    pub guide_text: String,
    pub text: String,
}

pub fn build_prompt(request: &FortuneRequest) -> FortunePrompt<'_> {
    let selected_types: Vec<&str> = request
        .fortune_types
        .iter()
        .map(|key| resolve_label(key))
        .collect();
    let summary = selected_types.join(", ");

    let guide_text: String = selected_types
        .iter()
        .filter_map(|label| guide_for_label(label).map(|guide| format!("\n- {label}: {guide}")))
        .collect();

    let mut text = format!(
        "{PROMPT_HEADER}\n\n\
         📋 기본 정보:\n\
         - 생년월일: {birth_date}\n\
         - 성별: {gender}\n\
         - 띠: {zodiac}띠\n\
         - 이름: {name}\n\n\
         🔮 요청하는 운세: {summary}",
        birth_date = request.birth_date,
        gender = request.gender,
        zodiac = request.zodiac,
        name = request.display_name(),
    );

    if let Some(concern) = request.concern() {
        text.push_str(&format!("\n\n💭 현재 고민: {concern}"));
    }

    text.push_str(&format!(
        "\n\n📌 각 운세별 포함 내용:{guide_text}\n\n\
         다음 조건으로 운세를 봐주세요:\n\
         1. 선택된 운세 종류에만 집중하고, 다른 영역은 언급하지 마세요\n\
         2. {zodiac}띠의 특성을 반영한 구체적이고 실용적인 조언을 제공하세요\n\
         3. 일반적인 내용보다는 개인에게 특화된 조언을 해주세요\n\
         4. 긍정적이되 현실적인 톤으로 작성해주세요\n\
         5. 전체적으로 400-500자 내외로 작성해주세요\n\
         6. 마크다운 문법(**, ###, -)을 사용하지 말고 일반 텍스트로만 작성해주세요\n\
         7. 굵은 글씨나 제목 형식 없이 자연스러운 문장으로 작성해주세요\n\n\
         이모지를 적절히 사용해서 보기 좋게 만들어주세요.",
        zodiac = request.zodiac,
    ));

    FortunePrompt {
        selected_types,
        summary,
        guide_text,
        text,
    }
}
