//! Prompt templates for the GymBro trainer persona.
//!
//! `reasoning_level` is only interpolated into the wording; it never changes
//! sampling parameters.

use crate::config::PromptStyle;
use crate::llm::ChatMessage;

/// Builds the single-string chat prompt sent to a completion backend.
pub fn chat_prompt(style: PromptStyle, message: &str, context: &str, reasoning_level: &str) -> String {
    match (style, context.is_empty()) {
        (PromptStyle::Coach, false) => format!(
            r#"
[INST] Eres un entrenador personal experto llamado "GymBro" que conoce perfectamente el entrenamiento de tu cliente. Tienes acceso a todos sus datos de entrenamiento, ejercicios, y progreso.

Reasoning: {reasoning_level}

CONTEXTO DEL USUARIO:
{context}

PREGUNTA: {message}

IMPORTANTE:
- Actúa como su entrenador personal que conoce cada detalle de su rutina
- Usa SIEMPRE los datos reales del contexto para responder
- Si pregunta "qué ejercicios he hecho hoy", responde SOLO con los entrenamientos REALES de hoy
- Si no hay entrenamientos hoy, di claramente "No has hecho entrenamientos hoy"
- Si hay entrenamientos, lista específicamente cada ejercicio con peso, reps y sets
- Habla en segunda persona ("has hecho", "tu entrenamiento", "tu progreso")
- Sé específico con los datos: pesos, repeticiones, series, fechas
- NO inventes ejercicios que no están en los datos
- NO mezcles ejercicios programados con ejercicios realizados
- Proporciona análisis detallado y recomendaciones personalizadas
- Usa el reasoning level para ajustar la profundidad de tu respuesta

Responde únicamente en español y asegúrate de completar todas las ideas. Termina tu respuesta con un punto final. [/INST]
"#
        ),
        (PromptStyle::Coach, true) => format!(
            r#"
[INST] Eres un entrenador personal experto llamado "GymBro". Responde SOLO EN ESPAÑOL de manera clara y directa.

Reasoning: {reasoning_level}

PREGUNTA: {message}

IMPORTANTE:
- Actúa como un entrenador personal profesional
- Habla en segunda persona ("tu entrenamiento", "tu progreso")
- Sé específico y práctico
- NO inventes datos que no tienes
- Si no tienes información específica, dilo claramente
- Usa el reasoning level para ajustar la profundidad de tu respuesta

Responde únicamente en español y asegúrate de completar todas las ideas. Termina tu respuesta con un punto final. [/INST]
"#
        ),
        (PromptStyle::Brief, false) => format!(
            "
Contexto de entrenamiento: {context}

Pregunta: {message}

Como experto en fitness, responde brevemente:
"
        ),
        (PromptStyle::Brief, true) => format!(
            "
Como experto en fitness y entrenamiento, responde SOLO EN ESPAÑOL de manera breve y práctica: {message}

Da 3-5 consejos específicos y útiles. Responde únicamente en español.
"
        ),
    }
}

/// Builds the role-tagged conversation for a chat-template backend.
pub fn chat_messages(message: &str, context: &str) -> Vec<ChatMessage> {
    let system = if context.is_empty() {
        r#"Eres un experto en fitness y entrenamiento llamado "GymBro". Responde siempre en español de manera completa y detallada."#.to_string()
    } else {
        format!(
            r#"Eres un experto en fitness y entrenamiento llamado "GymBro".
Responde siempre en español de manera completa y detallada.
Usa el contexto del usuario para dar respuestas personalizadas.

Contexto del usuario:
{context}"#
        )
    };

    vec![ChatMessage::system(system), ChatMessage::user(message)]
}

/// Wraps a raw training-data dump in the five-section analysis instruction.
pub fn analysis_prompt(style: PromptStyle, training_data: &str) -> String {
    match style {
        PromptStyle::Coach => format!(
            "
[INST] Eres un experto en entrenamiento físico. Analiza estos datos y proporciona insights útiles EN ESPAÑOL:

{training_data}

Proporciona EN ESPAÑOL:
1. Análisis del progreso
2. Patrones identificados
3. Recomendaciones específicas
4. Ajustes sugeridos
5. Consejos de optimización

Sé específico y práctico. Responde únicamente en español. [/INST]
"
        ),
        PromptStyle::Brief => format!(
            "
Analiza estos datos de entrenamiento y proporciona insights útiles EN ESPAÑOL:

{training_data}

Como experto en entrenamiento físico, proporciona EN ESPAÑOL:
1. Análisis detallado del progreso
2. Identificación de patrones y tendencias
3. Recomendaciones específicas para mejorar
4. Posibles ajustes en la rutina
5. Consejos para optimizar el rendimiento

Sé específico y proporciona consejos prácticos. Responde únicamente en español.
"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Role;

    #[test]
    fn test_coach_prompt_with_context_embeds_everything() {
        let prompt = chat_prompt(
            PromptStyle::Coach,
            "¿Qué hice hoy?",
            "2024-05-01: press banca 80kg 3x8",
            "high",
        );
        assert!(prompt.contains("\"GymBro\""));
        assert!(prompt.contains("Reasoning: high"));
        assert!(prompt.contains("CONTEXTO DEL USUARIO:\n2024-05-01: press banca 80kg 3x8"));
        assert!(prompt.contains("PREGUNTA: ¿Qué hice hoy?"));
        assert!(prompt.contains("Responde únicamente en español"));
    }

    #[test]
    fn test_coach_prompt_without_context_is_shorter() {
        let with = chat_prompt(PromptStyle::Coach, "hola", "datos", "medium");
        let without = chat_prompt(PromptStyle::Coach, "hola", "", "medium");
        assert!(!without.contains("CONTEXTO DEL USUARIO"));
        assert!(without.contains("Reasoning: medium"));
        assert!(without.len() < with.len());
    }

    #[test]
    fn test_reasoning_level_is_passed_through_unvalidated() {
        let prompt = chat_prompt(PromptStyle::Coach, "hola", "", "extremo");
        assert!(prompt.contains("Reasoning: extremo"));
    }

    #[test]
    fn test_brief_prompts() {
        let with = chat_prompt(PromptStyle::Brief, "hola", "datos", "low");
        assert!(with.contains("Contexto de entrenamiento: datos"));
        let without = chat_prompt(PromptStyle::Brief, "hola", "", "low");
        assert!(without.contains("SOLO EN ESPAÑOL de manera breve y práctica: hola"));
    }

    #[test]
    fn test_chat_messages_roles() {
        let messages = chat_messages("¿Cuántas series?", "historial");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.ends_with("Contexto del usuario:\nhistorial"));
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "¿Cuántas series?");

        let bare = chat_messages("hola", "");
        assert!(!bare[0].content.contains("Contexto del usuario"));
    }

    #[test]
    fn test_analysis_prompt_has_five_sections() {
        for style in [PromptStyle::Coach, PromptStyle::Brief] {
            let prompt = analysis_prompt(style, "squat 100kg");
            assert!(prompt.contains("squat 100kg"));
            for section in ["1. ", "2. ", "3. ", "4. ", "5. "] {
                assert!(prompt.contains(section));
            }
        }
    }
}
