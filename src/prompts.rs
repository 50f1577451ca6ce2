//! prompts.rs
//! Montagem dos prompts de geração. Todo texto visível ao modelo fica aqui,
//! junto com a substituição de placeholders do template da campanha.

use crate::models::campaign_model::Campaign;
use crate::models::lead_model::Lead;

/// Placeholder usado no prompt padrão quando o lead não tem o campo.
const NOT_INFORMED: &str = "Não informado";
/// Texto usado quando o lead não tem nenhum valor de campo personalizado.
const NO_CUSTOM_FIELDS: &str = "Nenhum campo personalizado";

/// Prompt de sistema: papel fixo + tom e contexto da campanha, verbatim.
pub fn build_system_prompt(campaign: &Campaign) -> String {
    format!(
        "Você é um assistente de vendas especializado em gerar mensagens de abordagem personalizadas.\n\
         Tom de voz: {}\n\
         Contexto da oferta: {}",
        campaign.tone, campaign.offer_context
    )
}

/// Prompt de usuário: template da campanha com placeholders substituídos,
/// ou o prompt padrão quando a campanha não define template (vazio conta
/// como ausente).
pub fn build_user_prompt(lead: &Lead, campaign: &Campaign) -> String {
    match campaign.prompt_template.as_deref() {
        Some(template) if !template.is_empty() => apply_template(template, lead),
        _ => build_default_prompt(lead, campaign),
    }
}

/// Sufixo que distingue textualmente cada uma das três chamadas.
pub fn variation_prompt(user_prompt: &str, variation: i32) -> String {
    format!("{}\n\nGere a variação {} da mensagem.", user_prompt, variation)
}

/// Substitui TODAS as ocorrências dos cinco placeholders; campos opcionais
/// ausentes viram string vazia.
fn apply_template(template: &str, lead: &Lead) -> String {
    template
        .replace("{{name}}", &lead.name)
        .replace("{{email}}", lead.email.as_deref().unwrap_or(""))
        .replace("{{phone}}", lead.phone.as_deref().unwrap_or(""))
        .replace("{{company}}", lead.company.as_deref().unwrap_or(""))
        .replace("{{position}}", lead.position.as_deref().unwrap_or(""))
}

fn build_default_prompt(lead: &Lead, campaign: &Campaign) -> String {
    format!(
        "Gere uma mensagem de abordagem personalizada para:\n\
         \n\
         Nome: {}\n\
         Empresa: {}\n\
         Cargo: {}\n\
         Email: {}\n\
         Telefone: {}\n\
         Campos personalizados: {}\n\
         \n\
         A mensagem deve ser {}, focada nos benefícios da nossa oferta, e incentivar o lead a responder ou agendar uma conversa.\n\
         Gere APENAS o texto da mensagem, sem saudações redundantes no início.",
        lead.name,
        text_or_not_informed(lead.company.as_deref()),
        text_or_not_informed(lead.position.as_deref()),
        text_or_not_informed(lead.email.as_deref()),
        text_or_not_informed(lead.phone.as_deref()),
        custom_fields_text(lead),
        campaign.tone
    )
}

/// Campo opcional vazio conta como ausente, não como texto em branco.
fn text_or_not_informed(value: Option<&str>) -> &str {
    match value {
        Some(text) if !text.is_empty() => text,
        _ => NOT_INFORMED,
    }
}

/// Achata os valores de campos personalizados em pares "campo: valor"
/// separados por vírgula.
fn custom_fields_text(lead: &Lead) -> String {
    if lead.custom_values.is_empty() {
        return NO_CUSTOM_FIELDS.to_string();
    }

    lead.custom_values
        .iter()
        .map(|cv| format!("{}: {}", cv.custom_fields.name, cv.value))
        .collect::<Vec<_>>()
        .join(", ")
}
