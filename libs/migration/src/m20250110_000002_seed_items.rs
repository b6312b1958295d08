use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Reference catalog of recyclable-material categories
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                INSERT INTO items (title, image) VALUES
                    ('Lâmpadas', 'lampadas.svg'),
                    ('Pilhas e Baterias', 'baterias.svg'),
                    ('Papéis e Papelão', 'papeis-e-papelao.svg'),
                    ('Resíduos Eletrônicos', 'eletronicos.svg'),
                    ('Resíduos Orgânicos', 'organicos.svg'),
                    ('Óleo de Cozinha', 'oleo.svg')
                ON CONFLICT (title) DO NOTHING
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DELETE FROM items WHERE title IN (
                    'Lâmpadas',
                    'Pilhas e Baterias',
                    'Papéis e Papelão',
                    'Resíduos Eletrônicos',
                    'Resíduos Orgânicos',
                    'Óleo de Cozinha'
                )
                "#,
            )
            .await?;

        Ok(())
    }
}
