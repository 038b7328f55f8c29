/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Header fields and Portuguese display names per endpoint.
//!
//! Pure data: each `*_FIELDS` slice lists response header fields broadcast onto
//! every row, each `*_LABELS` slice maps a source field to its column label.

pub type Labels = &'static [(&'static str, &'static str)];
pub type Fields = &'static [&'static str];

pub const PROGRAM_FIELDS: Fields = &[
  "governmentProgramCode",
  "governmentProgramName",
  "governmentSubProgramCode",
  "governmentSubProgramName",
];

pub const NEARBY_BRANCH_FIELDS: Fields = &["quantidadeAgencia"];

pub const NEARBY_BRANCH_LABELS: Labels = &[
  ("quantidadeAgencia", "Quantidade Agências"),
  ("codigo", "Código"),
  ("digito", "Dígito"),
  ("nome", "Nome"),
  ("cep", "CEP"),
  ("logradouro", "Logradouro"),
  ("bairro", "Bairro"),
  ("municipio", "Munícipio"),
  ("siglaUF", "Sigla UF"),
  ("sugerida", "Sugerida"),
];

pub const STATEMENT_LABELS: Labels = &[
  ("governmentProgramCode", "Código Programa Governo"),
  ("governmentProgramName", "Nome Programa Governo"),
  ("governmentSubProgramCode", "Código SubPrograma Governo"),
  ("governmentSubProgramName", "Nome SubPrograma Governo"),
  ("id", "ID Transação"),
  ("bookingDate", "Data Agendamento"),
  ("orderIndex", "Índice Ordem"),
  ("valueDate", "Data Valor"),
  ("referenceNumber", "Número Referência"),
  ("value", "Valor"),
  ("accountBalance", "Saldo Conta"),
  ("descriptionCode", "Código Descrição"),
  ("descriptionName", "Nome Descrição"),
  ("descriptionBatchNumber", "Número Lote Descrição"),
  ("creditDebitIndicator", "Indicador Crédito Débito"),
  ("beneficiaryBankIdentifierCode", "Código Identificador Banco Beneficiário"),
  ("beneficiaryBranchCode", "Código Agência Beneficiário"),
  ("beneficiaryAccountNumber", "Número Conta Beneficiário"),
  ("beneficiaryPersonType", "Tipo Pessoa Beneficiário"),
  ("beneficiaryDocumentId", "ID Documento Beneficiário"),
  ("beneficiaryName", "Nome Beneficiário"),
  ("pendingExpenseConciliation", "Conciliação Despesa Pendente"),
  ("attachedExpenseDocumentIndicator", "Indicador Anexo Documento Despesa"),
  ("expenseCategoryCode", "Código Categoria Despesa"),
  ("expenseIdentificationStatus", "Status Identificação Despesa"),
  ("subTransactionQuantity", "Quantidade Subtransações"),
  ("bankOrderRuleCode", "Código Ordem Pagamento Banco"),
  ("bankOrderPurposeCode", "Código Finalidade Ordem Banco"),
  ("bankOrderPurposeDescription", "Descrição Finalidade Ordem Banco"),
  ("expenseSequentialNumber", "Número Sequencial Despesa"),
  ("expensesCategory", "Categoria Despesa"),
  ("expensesDocuments", "ID Documento Despesa"),
];

pub const ISSUER_LABELS: Labels = &[
  ("corporateTaxPayerRegistry", "CNPJ"),
  ("individualTaxPayerRegistry", "CPF"),
  ("stateRegistrationNumber", "RG"),
  ("legalName", "Nome Legal"),
  ("tradeName", "Nome Social"),
  ("countryName", "Nacionalidade"),
  ("stateAbbreviation", "UF"),
  ("cityName", "Cidade"),
  ("districtName", "Bairro"),
  ("additionalAddressInformation", "Endereço"),
  ("postalCode", "CEP"),
  ("phoneNumber", "Telefone"),
];

pub const RECIPIENT_LABELS: Labels = &[
  ("corporateTaxPayerRegistry", "CNPJ"),
  ("individualTaxPayerRegistry", "CPF"),
  ("stateRegistrationNumber", "RG"),
  ("legalName", "Nome Legal"),
  ("tradeName", "Nome Social"),
  ("countryName", "Nacionalidade"),
  ("stateAbbreviation", "UF"),
  ("cityName", "Cidade"),
  ("districtName", "Bairro"),
  ("additionalAddressInformation", "Endereço"),
  ("postalCode", "CEP"),
  ("phoneNumber", "Telefone"),
  ("presenceTypeCode", "Código Tipo Presença"),
  ("typeConsumerCode", "Código Tipo Consumidor"),
];

pub const DOCUMENT_FIELDS: Fields = &[
  "accessKey",
  "receiptTypeCode",
  "typeCode",
  "serialCode",
  "number",
  "issueDate",
  "movementDate",
  "itemDeliveryDate",
  "value",
  "operationTypeName",
  "operation",
  "paymentMethod",
  "digitalSignatureCode",
  "pronafAbilityRegistration",
  "timestamp",
  "userId",
  "discountValue",
  "totalDiscountValue",
  "realeaseInstrumentCode",
  "realeaseInstrumentName",
  "realeaseInstrumentDate",
  "additionalInformation",
];

pub const DOCUMENT_LABELS: Labels = &[
  ("accessKey", "Chave Acesso"),
  ("receiptTypeCode", "Código Tipo Recibo"),
  ("typeCode", "Código Tipo"),
  ("serialCode", "Código Série"),
  ("number", "Número"),
  ("issueDate", "Data Emissão"),
  ("movementDate", "Data Movimentação"),
  ("itemDeliveryDate", "Data Entrega"),
  ("value", "Valor"),
  ("operationTypeName", "Nome Tipo Operação"),
  ("operation", "Operação"),
  ("paymentMethod", "Método Pagamento"),
  ("digitalSignatureCode", "Código Assinatura Digital"),
  ("pronafAbilityRegistration", "Registro Habilidade Pronaf"),
  ("timestamp", "Momento"),
  ("userId", "ID Usuário"),
  ("discountValue", "Valor Desconto"),
  ("totalDiscountValue", "Valor Total Desconto"),
  ("realeaseInstrumentCode", "Código Liberação de Instrumento"),
  ("realeaseInstrumentName", "Nome Liberação Instrumento"),
  ("realeaseInstrumentDate", "Data Liberação Instrumento"),
  ("additionalInformation", "Informação Adicional"),
  ("description", "Descrição Item"),
  ("quantity", "Quantidade Item"),
  ("metric", "Métrica Item"),
  ("unitValue", "Valor Unitário Item"),
  ("totalValue", "Valor Total Item"),
  ("mercosurCommonNameId", "ID Nome Comum Mercosul"),
  ("itemDiscountValue", "Valor Desconto Item"),
];

pub const SUBTRANSACTION_EXPLODED: Fields = &["expensesCategory", "expensesDocuments"];

pub const SUBTRANSACTION_LABELS: Labels = &[
  ("governmentProgramCode", "Código Programa Governo"),
  ("governmentProgramName", "Nome Programa Governo"),
  ("governmentSubProgramCode", "Código SubPrograma Governo"),
  ("governmentSubProgramName", "Nome SubPrograma Governo"),
  ("id", "ID"),
  ("codeSubtransactionState", "Estado Código Subtransação"),
  ("paymentState", "Estado Pagamento"),
  ("paymentDate", "Data Pagamento"),
  ("value", "Valor"),
  ("beneficiaryBankIdentifierCode", "Código Identificador Banco Beneficiário"),
  ("beneficiaryBranchCode", "Código Agência Beneficiário"),
  ("beneficiaryAccountNumber", "Número Conta Beneficiário"),
  ("beneficiaryPersonType", "Tipo Pessoa Beneficiário"),
  ("beneficiaryDocumentId", "ID Documento Beneficiário"),
  ("beneficiaryName", "Nome Beneficiário"),
  ("attachedExpenseDocumentIndicator", "Indicador Anexo Documento Despesa"),
  ("expenseCategoryCode", "Código Categoria Despesa"),
  ("subtransactionAccountabilityIndicator", "Indicador Contabilidade Subtransação"),
  ("subtransactionAccountabilityName", "Nome Contabilidade Subtransação"),
  ("bankOrderPurposeCode", "Código Finalidade Ordem Banco"),
  ("bankOrderRuleCode", "Código Ordem Pagamento Banco"),
  ("bankOrderPurposeDescription", "Descrição Finalidade Ordem Banco"),
  ("expenseSequentialNumber", "Número Sequencial Despesa"),
  ("code", "Código Categoria Despesa"),
  ("parentCode", "Código Pai Categoria Despesa"),
  ("name", "Nome Categoria Despesa"),
  ("expensesDocuments", "Documentos Despesa"),
];

/// The fund statement header repeats `valorCota`, so it is renamed first.
pub const FUND_ALIASES: Labels = &[("valorCota", "valorCotaExtrato")];

pub const FUND_FIELDS: Fields = &[
  "numeroAgenciaRecebedora",
  "digitoVerificadorContaRecebedora",
  "numeroContaCorrenteRecebedora",
  "numeroDigitoVerificadorContaCorrenteRecebedora",
  "nomeClienteRecebedor",
  "nomeFundoInvestimento",
  "CNPJFundoInvestimento",
  "valorCotaExtrato",
  "dataAfericaoValorCota",
  "ultimaCotacaoCota",
  "dataUltimaCotacaoCota",
  "sinalRentabilidadeMes",
  "valorRentabilidadeMes",
  "sinalRentabilidadeAno",
  "valorRentabilidadeAno",
  "sinalRentabilidadeResgateTotal",
  "valorRentabilidadeResgateTotal",
  "valorDisponivelResgate",
  "valorCarenciaResgate",
  "valorIRPrevisto",
  "percentualIRPrevisto",
  "valorIRComplementarPrevisto",
  "valorIOFPrevisto",
  "valorTaxaSaida",
  "valorBonusDesempenho",
  "valorBloqueado",
  "valorAplicado",
  "valorResgate",
  "valorSaldoAnterior",
  "quantidadeCotaAnterior",
  "dataSaldoAnterior",
  "valorTotalAplicadoPeriodo",
  "valorTotalResgatadoPeriodo",
  "sinalRendimentoBrutoPeriodo",
  "valorRendimentoBrutoPeriodo",
  "valorTotalIRPeriodo",
  "valorTotalIOFPeriodo",
  "valorTotalTaxaSaidaPeriodo",
  "valorTotalBonusDesempenhoPeriodo",
  "sinalRendimentoLiquido",
  "valorRendimentoLiquido",
  "valorSaldoMesAnterior",
  "quantidadeCotaMesAnterior",
  "dataSaldoMesAnterior",
  "numeroLancamento",
];

pub const FUND_LABELS: Labels = &[
  ("numeroAgenciaRecebedora", "Número Agência Recebedora"),
  ("digitoVerificadorContaRecebedora", "Dígito Verificador Conta Recebedora"),
  ("numeroContaCorrenteRecebedora", "Número Conta Corrente Recebedora"),
  (
    "numeroDigitoVerificadorContaCorrenteRecebedora",
    "Número Dígito Verificador Conta Corrente Recebedora",
  ),
  ("nomeClienteRecebedor", "Nome Cliente Recebedor"),
  ("nomeFundoInvestimento", "Nome Fundo Investimento"),
  ("CNPJFundoInvestimento", "CNPJ Fundo Investimento"),
  ("valorCotaExtrato", "Valor Cota Extrato"),
  ("dataAfericaoValorCota", "Data Afericão Valor Cota"),
  ("ultimaCotacaoCota", "Última Cotação Cota"),
  ("dataUltimaCotacaoCota", "Data Última Cotação Cota"),
  ("sinalRentabilidadeMes", "Sinal Rentabilidade Mês"),
  ("valorRentabilidadeMes", "Valor Rentabilidade Mês"),
  ("sinalRentabilidadeAno", "Sinal Rentabilidade Ano"),
  ("valorRentabilidadeAno", "Valor Rentabilidade Ano"),
  ("sinalRentabilidadeResgateTotal", "Sinal Rentabilidade Resgate Total"),
  ("valorRentabilidadeResgateTotal", "Valor Rentabilidade Resgate Total"),
  ("valorDisponivelResgate", "Valor Disponível Resgate"),
  ("valorCarenciaResgate", "Valor Carência Resgate"),
  ("valorIRPrevisto", "Valor IR Previsto"),
  ("percentualIRPrevisto", "Percentual IR Previsto"),
  ("valorIRComplementarPrevisto", "Valor IR Complementar Previsto"),
  ("valorIOFPrevisto", "Valor IOF Previsto"),
  ("valorTaxaSaida", "Valor Taxa Saída"),
  ("valorBonusDesempenho", "Valor Bônus Desempenho"),
  ("valorBloqueado", "Valor Bloqueado"),
  ("valorAplicado", "Valor Aplicado"),
  ("valorResgate", "Valor Resgate"),
  ("valorSaldoAnterior", "Valor Saldo Anterior"),
  ("quantidadeCotaAnterior", "Quantidade Cota Anterior"),
  ("dataSaldoAnterior", "Data Saldo Anterior"),
  ("valorTotalAplicadoPeriodo", "Valor Total Aplicado Período"),
  ("valorTotalResgatadoPeriodo", "Valor Total Resgatado Período"),
  ("sinalRendimentoBrutoPeriodo", "Sinal Rendimento Bruto Período"),
  ("valorRendimentoBrutoPeriodo", "Valor Rendimento Bruto Período"),
  ("valorTotalIRPeriodo", "Valor Total IR Período"),
  ("valorTotalIOFPeriodo", "Valor Total IOF Período"),
  ("valorTotalTaxaSaidaPeriodo", "Valor Total Taxa Saída Período"),
  ("valorTotalBonusDesempenhoPeriodo", "Valor Total Bônus Desempenho Período"),
  ("sinalRendimentoLiquido", "Sinal Rendimento Líquido"),
  ("valorRendimentoLiquido", "Valor Rendimento Líquido"),
  ("valorSaldoMesAnterior", "Valor Saldo Mês Anterior"),
  ("quantidadeCotaMesAnterior", "Quantidade Cota Mês Anterior"),
  ("dataSaldoMesAnterior", "Data Saldo Mês Anterior"),
  ("numeroLancamento", "Número Lançamento"),
  ("dataLancamento", "Data Lançamento"),
  ("descricao", "Descrição"),
  ("valorLancamento", "Valor Lançamento"),
  ("valorIR", "Valor IR"),
  ("valorPrejuizo", "Valor Prejuízo"),
  ("valorIOF", "Valor IOF"),
  ("quantidadeCota", "Quantidade Cota"),
  ("valorCota", "Valor Cota Lançamento"),
  ("saldoCotas", "Saldo Cotas"),
  ("valorBaseCalculoIR", "Valor Base Cálculo IR"),
  ("numeroDocumentoLancamento", "Número Documento Lançamento"),
];

/// Program fields of the fund statement live outside the `extrato` object.
pub const FUND_PROGRAM_LABELS: Labels = &[
  ("codigoProgramaGoverno", "Código Programa Governo"),
  ("nomeProgramaGoverno", "Nome Programa Governo"),
  ("codigoSubProgramaGoverno", "Código SubPrograma Governo"),
  ("nomeSubProgramaGoverno", "Nome SubPrograma Governo"),
];

pub const SAVINGS_FIELDS: Fields = &[
  "codigoProgramaGoverno",
  "nomeProgramaGoverno",
  "codigoSubProgramaGoverno",
  "nomeSubProgramaGoverno",
  "nomeCliente",
  "identificadorCliente",
  "saldoAnterior",
  "saldoAtual",
  "saldoBloqueado",
  "saldoDisponivel",
];

pub const SAVINGS_LABELS: Labels = &[
  ("codigoProgramaGoverno", "Código Programa Governo"),
  ("nomeProgramaGoverno", "Nome Programa Governo"),
  ("codigoSubProgramaGoverno", "Código SubPrograma Governo"),
  ("nomeSubProgramaGoverno", "Nome SubPrograma Governo"),
  ("nomeCliente", "Nome Cliente"),
  ("identificadorCliente", "Identificador Cliente"),
  ("saldoAnterior", "Saldo Anterior"),
  ("saldoAtual", "Saldo Atual"),
  ("saldoBloqueado", "Saldo Bloqueado"),
  ("saldoDisponivel", "Saldo Disponível"),
  ("dataLancamento", "Data Lançamento"),
  ("dataMovimento", "Data Movimento"),
  ("diaLancamento", "Dia Lançamento"),
  ("codigoHistorico", "Código Histórico"),
  ("descricaoHistorico", "Descrição Histórico"),
  ("indicadorDebitoCredito", "Indicador Débito Crédito"),
  ("agenciaOrigem", "Agência Origem"),
  ("numeroDocumento", "Número Documento"),
  ("valorLancamento", "Valor Lançamento"),
];

pub const PAGE_FIELDS: Fields = &["totalPaginas"];

pub const UPDATED_ENTRY_LABELS: Labels = &[
  ("totalPaginas", "Total Páginas"),
  ("agencia", "Agência"),
  ("contaCorrente", "Conta Corrente"),
  ("sequencialLancamento", "Sequencial Lançamento"),
];

pub const UPDATED_SUB_ENTRY_LABELS: Labels = &[
  ("totalPaginas", "Total Páginas"),
  ("agencia", "Agência"),
  ("contaCorrente", "Conta Corrente"),
  ("sequencialLancamento", "Sequencial Lançamento"),
  ("sequencialSublancamento", "Sequencial Sublançamento"),
];

pub const CATEGORY_LABELS: Labels = &[
  ("codigo", "Código Categoria"),
  ("nome", "Nome Categoria"),
  ("codigoCategoriaAgrupadora", "Código Categoria Agrupadora"),
  ("indicadorDespesaAtiva", "Indicador Despesa Ativa"),
];

pub const BALANCE_FIELDS: Fields = &["dataSaldo", "valorDisponibilidade"];

pub const INVESTMENT_BALANCE_LABELS: Labels = &[
  ("dataSaldo", "Data Saldo"),
  ("valorDisponibilidade", "Valor Disponibilidade"),
  ("codigo", "Código"),
  ("valor", "Valor"),
  ("indicadorSaldoNaoDisponivel", "Indicador Saldo Não Disponível"),
  ("mensagemSaldoApurado", "Mensagem Saldo Apurado"),
];

pub const CHECKING_BALANCE_LABELS: Labels =
  &[("dataSaldo", "Data Saldo"), ("valorDisponibilidade", "Valor Disponibilidade")];

pub const EXPENSE_CATEGORY_RECEIPT_LABELS: Labels =
  &[("timestampInclusaoCategoriaDespesa", "Momento Inclusão Categoria Despesa")];

pub const CREDIT_IDENTIFICATION_RECEIPT_LABELS: Labels = &[
  ("numeroSequencialLancamentoContaCorrente", "Número Sequencial Lançamento Conta Corrente"),
  ("numeroSequencialIdentificacaoLancamento", "Número Sequencial Identificação Lançamento"),
  ("timestampInclusaoIdentificacaoLancamento", "Momento Inclusão Identificação Lançamento"),
];

pub const CREDIT_IDENTIFICATION_DELETION_LABELS: Labels =
  &[("timestampExclusaoIdentificacaoLancamento", "Momento Exclusão Identificação Lançamento")];

pub const DEBIT_IDENTIFICATION_FIELDS: Fields =
  &["numeroPaginaTotal", "quantidadeIdentificacaoLancamento"];

pub const DEBIT_IDENTIFICATION_LABELS: Labels = &[
  ("numeroPaginaTotal", "Número Página Total"),
  ("quantidadeIdentificacaoLancamento", "Quantidade Identificação Lançamento"),
  ("numeroSequencialLancamentoContaCorrente", "Número Sequencial Lançamento Conta Corrente"),
  ("numeroSequencialIdentificacaoLancamento", "Número Sequencial Identificação Lançamento"),
  ("tipoIdentificacao", "Tipo Identificação"),
  ("tipoIdentificacaoTexto", "Tipo Identificação Texto"),
  ("codigoIdentificacao", "Código Identificação"),
  ("numeroCompanhia", "Número Companhia"),
  ("valorFracionado", "Valor Fracionado"),
];

pub const CHECKING_ACCOUNT_FIELDS: Fields = &["numeroRegistroConsultar", "quantidadeContaCorrente"];

pub const CHECKING_ACCOUNT_LABELS: Labels = &[
  ("numeroRegistroConsultar", "Número Registro Consultar"),
  ("quantidadeContaCorrente", "Quantidade Conta Corrente"),
  ("codigoProgramaGoverno", "Código Programa Governo"),
  ("nomeProgramaGoverno", "Nome Programa Governo"),
  ("cnpj", "CNPJ"),
  ("agencia", "Agência"),
  ("nomeAgencia", "Nome Agência"),
  ("contaCorrente", "Conta Corrente"),
];
